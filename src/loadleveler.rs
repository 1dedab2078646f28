//! Render LoadLeveler submission files and hand them to llsubmit

/// Rewrite the template's marker lines for each thread count
pub mod script;

/// Run the llsubmit system command on rendered submission files
pub mod submit;
