//! Scenario: Evolving Catalog
//!
//! Journey: The catalog changes between builds.
//!
//! Steps:
//! 1. Generate for the sample catalog
//! 2. Drop `Customer`, add `Invoice`
//! 3. `diff` previews one create and one removal
//! 4. `generate --prune` applies it; unchanged files are not rewritten

use std::time::SystemTime;

use crate::common::*;

fn modified(env: &TestEnv, relative: &str) -> SystemTime {
    std::fs::metadata(env.path(relative))
        .unwrap()
        .modified()
        .unwrap()
}

/// SCENARIO: catalog edit followed by diff and prune
#[test]
fn scenario_catalog_edit_diff_then_prune() {
    let env = TestEnv::with_config(SAMPLE_CONFIG);

    // Step 1
    assert!(env.run(&["generate"]).success);
    let product_mtime = modified(&env, "Generated/ProductCommandsAndQueries.g.cs");

    // Step 2
    env.write_file(
        "cqrsgen.toml",
        "[catalog]\nentities = [\"Product\", \"Order\", \"Invoice\"]\n",
    );

    // Step 3
    let result = env.run(&["diff"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("1 to create, 0 to update, 1 to remove, 2 unchanged"));
    assert!(env.path("Generated/CustomerCommandsAndQueries.g.cs").exists());

    // Step 4
    let result = env.run(&["generate", "--prune"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(env.path("Generated/InvoiceCommandsAndQueries.g.cs").exists());
    assert!(!env.path("Generated/CustomerCommandsAndQueries.g.cs").exists());
    assert_eq!(
        modified(&env, "Generated/ProductCommandsAndQueries.g.cs"),
        product_mtime
    );
}
