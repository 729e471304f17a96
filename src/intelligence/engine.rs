use crate::models::{MarkerCategory, Measurement};

use super::classify::{categorize, kidney_marker_abnormal};
use super::messages::compose_recommendations;
use super::types::{ClassificationResult, RiskSignals};

/// Classify one report's measurements into a risk assessment.
///
/// Only the first uric-acid reading is kept, and the uric-acid signal and
/// thresholds come from that reading alone. Later uric-acid lines are ignored.
pub fn classify_measurements(measurements: &[Measurement]) -> ClassificationResult {
    let mut uric_acid: Option<Measurement> = None;
    let mut inflammatory_markers = Vec::new();
    let mut kidney_markers = Vec::new();
    let mut signals = RiskSignals::default();

    for measurement in measurements {
        let category = categorize(measurement.parameter());
        tracing::debug!(
            parameter = measurement.parameter(),
            category = category.as_str(),
            status = measurement.status().as_str(),
            "Categorised measurement"
        );

        match category {
            MarkerCategory::UricAcid => {
                if uric_acid.is_none() {
                    uric_acid = Some(measurement.clone());
                } else {
                    tracing::debug!(
                        parameter = measurement.parameter(),
                        "Ignoring repeated uric acid reading"
                    );
                }
            }
            MarkerCategory::Inflammation => {
                signals.inflammation_present |= measurement.is_high();
                inflammatory_markers.push(measurement.clone());
            }
            MarkerCategory::Kidney => {
                signals.kidney_issues |= kidney_marker_abnormal(measurement);
                kidney_markers.push(measurement.clone());
            }
            MarkerCategory::Unknown => {}
        }
    }

    signals.uric_acid_high = uric_acid.as_ref().is_some_and(Measurement::is_high);

    let recommendations = compose_recommendations(uric_acid.as_ref(), &signals);
    let risk_level = signals.risk_level();
    let follow_up_needed = signals.follow_up_needed();

    tracing::info!(
        measurements = measurements.len(),
        risk_level = risk_level.as_str(),
        follow_up_needed,
        recommendations = recommendations.len(),
        "Lab report classified"
    );

    ClassificationResult {
        uric_acid,
        inflammatory_markers,
        kidney_markers,
        risk_level,
        follow_up_needed,
        recommendations,
    }
}
