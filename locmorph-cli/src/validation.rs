use std::path::Path;

/// Validate the input folder exists and is a directory
pub fn validate_input_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Input folder does not exist: {}", path.display()));
    }

    if !path.is_dir() {
        return Err(format!("Input path is not a directory: {}", path.display()));
    }

    Ok(())
}

/// Validate the output path can be used as a directory
pub fn validate_output_dir(path: &Path) -> Result<(), String> {
    if path.exists() && !path.is_dir() {
        return Err(format!(
            "Output path exists and is not a directory: {}",
            path.display()
        ));
    }

    Ok(())
}
