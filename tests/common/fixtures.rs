//! Config fixtures shared by CLI and scenario tests

/// The sample catalog from the generator's original setup
pub const SAMPLE_CONFIG: &str = r#"
[catalog]
entities = ["Product", "Order", "Customer"]
"#;

/// One invalid entity between two valid ones
pub const CONFIG_WITH_INVALID_ENTITY: &str = r#"
[catalog]
entities = ["Product", "Bad Name", "Order"]
"#;

/// Unknown key with a close match
pub const CONFIG_WITH_TYPO: &str = r#"
[catalog]
entities = ["Product"]

[output]
extention = "cs"
"#;

/// Key file names for the sample catalog, in catalog order
pub const SAMPLE_FILES: [&str; 3] = [
    "ProductCommandsAndQueries.g.cs",
    "OrderCommandsAndQueries.g.cs",
    "CustomerCommandsAndQueries.g.cs",
];
