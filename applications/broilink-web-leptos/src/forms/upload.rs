use thiserror::Error;

const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// File selection rejected before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a CSV file")]
    NotCsv(String),
    #[error("Please select a CSV file first")]
    NoFile,
    #[error("Please select a kandang first")]
    NoFarm,
    #[error("Format foto harus JPG atau PNG")]
    NotImage(String),
}

/// Accept `.csv` names (any case) or a MIME type mentioning csv
pub fn check_csv_file(name: &str, mime_type: &str) -> Result<(), UploadError> {
    let by_name = extension(name).is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if by_name || mime_type.to_ascii_lowercase().contains("csv") {
        Ok(())
    } else {
        Err(UploadError::NotCsv(name.to_string()))
    }
}

pub fn check_photo_file(name: &str) -> Result<(), UploadError> {
    let accepted = extension(name).is_some_and(|ext| {
        PHOTO_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    });
    if accepted {
        Ok(())
    } else {
        Err(UploadError::NotImage(name.to_string()))
    }
}

/// Both a file and a farm must be chosen before uploading
pub fn upload_target<F>(file: Option<F>, farm_id: Option<i64>) -> Result<(F, i64), UploadError> {
    let file = file.ok_or(UploadError::NoFile)?;
    let farm_id = farm_id.ok_or(UploadError::NoFarm)?;
    Ok((file, farm_id))
}

pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} KB", bytes / 1024.0)
}

fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_guard() {
        assert_eq!(check_csv_file("data.csv", ""), Ok(()));
        assert_eq!(check_csv_file("DATA.CSV", ""), Ok(()));
        assert_eq!(check_csv_file("export", "text/csv"), Ok(()));
        assert_eq!(
            check_csv_file("data.txt", "text/plain"),
            Err(UploadError::NotCsv("data.txt".into()))
        );
        assert_eq!(
            check_csv_file("csv", "application/octet-stream"),
            Err(UploadError::NotCsv("csv".into()))
        );
    }

    #[test]
    fn test_photo_guard() {
        assert!(check_photo_file("me.JPG").is_ok());
        assert!(check_photo_file("me.jpeg").is_ok());
        assert!(check_photo_file("me.png").is_ok());
        assert!(check_photo_file("me.gif").is_err());
        assert!(check_photo_file("png").is_err());
    }

    #[test]
    fn test_upload_needs_file_then_farm() {
        assert_eq!(upload_target::<&str>(None, Some(1)), Err(UploadError::NoFile));
        assert_eq!(upload_target(Some("data.csv"), None), Err(UploadError::NoFarm));
        assert_eq!(upload_target(Some("data.csv"), Some(2)), Ok(("data.csv", 2)));
    }

    #[test]
    fn test_file_size() {
        assert_eq!(format_file_size(2048.0), "2.00 KB");
        assert_eq!(format_file_size(1536.0), "1.50 KB");
    }
}
