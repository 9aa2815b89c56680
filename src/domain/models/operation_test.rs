use std::time::Duration;

use strum::IntoEnumIterator;

use super::Operation;
use super::TestType;

#[test]
fn it_orders_timeouts_by_expected_latency() {
    assert_eq!(Operation::Coverage.default_timeout(), Duration::from_secs(60));
    assert_eq!(
        Operation::RequirementsOptimization.default_timeout(),
        Duration::from_secs(60)
    );
    assert_eq!(Operation::UnitTests.default_timeout(), Duration::from_secs(120));
    assert_eq!(
        Operation::IntegrationTests.default_timeout(),
        Duration::from_secs(180)
    );
    assert_eq!(Operation::StressTests.default_timeout(), Duration::from_secs(240));
}

#[test]
fn it_ticks_generation_slower_than_analysis() {
    for operation in Operation::iter() {
        let expected = if operation.is_generation() { 5 } else { 2 };
        assert_eq!(operation.progress_interval(), Duration::from_secs(expected));
    }
}

#[test]
fn it_parses_kebab_case_names() {
    assert_eq!(
        Operation::parse("requirements-analysis"),
        Some(Operation::RequirementsAnalysis)
    );
    assert_eq!(Operation::parse("unit-tests"), Some(Operation::UnitTests));
    assert_eq!(Operation::parse("nope"), None);
}

#[test]
fn it_formats_error_messages_from_label() {
    insta::assert_snapshot!(
        Operation::UnitTests.timeout_message(),
        @"The test generation request timed out. Try with fewer or smaller files."
    );
    insta::assert_snapshot!(
        Operation::Coverage.network_message(),
        @"Coverage analysis request failed. Please check your connection and try again."
    );
    insta::assert_snapshot!(
        Operation::StressTests.backend_message("quota exceeded"),
        @"Stress test generation failed: quota exceeded"
    );
}

#[test]
fn it_maps_test_types_to_operations() {
    assert_eq!(TestType::Unit.operation(), Operation::UnitTests);
    assert_eq!(TestType::Integration.operation(), Operation::IntegrationTests);
    assert_eq!(TestType::Stress.operation(), Operation::StressTests);
    assert_eq!(TestType::Stress.next(), TestType::Unit);
    assert_eq!(TestType::Integration.to_string(), "integration");
}
