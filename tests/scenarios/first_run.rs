//! Scenario: First Run
//!
//! Journey: A developer adds cqrsgen as a pre-build step.
//!
//! Steps:
//! 1. `cqrsgen init` writes the sample catalog
//! 2. `cqrsgen check` confirms every entity renders
//! 3. `cqrsgen generate` writes one file per entity
//! 4. The files hold the expected declarations in a stable order

use crate::common::*;

/// SCENARIO: sample catalog from init to generated files
#[test]
fn scenario_first_run_sample_catalog() {
    let env = TestEnv::new();

    // Step 1
    let result = env.run(&["init"]);
    assert!(result.success, "init failed:\n{}", result.combined_output());

    // Step 2
    let result = env.run(&["check"]);
    assert!(result.success, "check failed:\n{}", result.combined_output());

    // Step 3
    let result = env.run(&["generate", "--json"]);
    assert!(result.success, "generate failed:\n{}", result.combined_output());
    let keys: Vec<String> = result.json()["report"]["emitted"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        keys,
        vec![
            "ProductCommandsAndQueries",
            "OrderCommandsAndQueries",
            "CustomerCommandsAndQueries",
        ]
    );

    // Step 4
    for (entity, file) in ["Product", "Order", "Customer"].iter().zip(SAMPLE_FILES) {
        let text = env.read_file(&format!("Generated/{}", file));
        let order: Vec<usize> = [
            format!("class Create{}Command ", entity),
            format!("class Create{}CommandHandler ", entity),
            format!("class Get{}ByIdQuery ", entity),
            format!("class Get{}ByIdQueryHandler ", entity),
        ]
        .iter()
        .map(|needle| {
            text.find(needle.as_str())
                .unwrap_or_else(|| panic!("{} missing from {}", needle, file))
        })
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{} out of order", file);
    }
}
