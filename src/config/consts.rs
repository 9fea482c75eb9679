/// Default decoding engine executable
pub const DEFAULT_ENGINE_PROGRAM: &str = "nlp4j-decode";
/// Default directory holding the lexica files named by the catalog
pub const DEFAULT_LEXICA_ROOT: &str = "resources/lexica";
/// Default directory holding the trained model files
pub const DEFAULT_MODELS_ROOT: &str = "resources/models";
/// Default prefix for per-request working directories
pub const DEFAULT_WORKSPACE_PREFIX: &str = "input";
/// Extension the engine reads input documents from (`-ie`)
pub const DEFAULT_INPUT_EXTENSION: &str = "input";
/// Extension the engine writes results with (`-oe`)
pub const DEFAULT_OUTPUT_EXTENSION: &str = "out";
/// Payload keys containing this substring are treated as input documents
pub const INPUT_KEY_MARKER: &str = "input";
/// Response map key for the engine's console output
pub const PRINTED_KEY: &str = "Printed";
/// Response map key prefix for collected output files
pub const OUTPUT_FILE_KEY_PREFIX: &str = "output-file-";
