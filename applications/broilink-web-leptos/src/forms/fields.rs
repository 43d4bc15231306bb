use super::FormError;
use crate::auth::LoginError;
use crate::models::{Credentials, DailyReport, OwnerRequest, RequestType};

pub const OTP_LENGTH: usize = 6;

/// Trim both fields and require them to be present
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, LoginError> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() {
        return Err(LoginError::EmptyUsername);
    }
    if password.is_empty() {
        return Err(LoginError::EmptyPassword);
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Raw text of the daily report inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub pakan: String,
    pub minum: String,
    pub bobot: String,
    pub kematian: String,
}

impl ReportForm {
    pub fn validate(&self) -> Result<DailyReport, FormError> {
        Ok(DailyReport {
            konsumsi_pakan: parse_amount("Jumlah pakan", &self.pakan)?,
            konsumsi_air: parse_amount("Jumlah minum", &self.minum)?,
            rata_rata_bobot: parse_amount("Bobot rata-rata", &self.bobot)?,
            jumlah_kematian: parse_count("Jumlah kematian", &self.kematian)?,
        })
    }
}

/// Owner change request; the content must not be blank
pub fn validate_request(
    request_type: RequestType,
    content: &str,
) -> Result<OwnerRequest, FormError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(FormError::Required("Isi permintaan"));
    }
    Ok(OwnerRequest {
        request_type,
        request_content: content.to_string(),
    })
}

/// Parse one farm configuration input
pub fn parse_config_value(label: &'static str, text: &str) -> Result<f64, FormError> {
    parse_number(label, text)
}

pub fn validate_otp(code: &str) -> Result<String, FormError> {
    let code = code.trim();
    if code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(code.to_string())
    } else {
        Err(FormError::InvalidOtp)
    }
}

/// Normalise a phone number, dropping spaces and dashes
pub fn validate_phone(phone: &str) -> Result<String, FormError> {
    let compact: String = phone
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    if compact.is_empty() {
        return Err(FormError::Required("Nomor telepon"));
    }

    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    if (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(compact)
    } else {
        Err(FormError::InvalidPhone)
    }
}

fn parse_number(label: &'static str, text: &str) -> Result<f64, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormError::Required(label));
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FormError::NotANumber(label))
}

fn parse_amount(label: &'static str, text: &str) -> Result<f64, FormError> {
    let value = parse_number(label, text)?;
    if value < 0.0 {
        return Err(FormError::Negative(label));
    }
    Ok(value)
}

fn parse_count(label: &'static str, text: &str) -> Result<u32, FormError> {
    let value = parse_amount(label, text)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(FormError::NotAnInteger(label));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(pakan: &str, minum: &str, bobot: &str, kematian: &str) -> ReportForm {
        ReportForm {
            pakan: pakan.into(),
            minum: minum.into(),
            bobot: bobot.into(),
            kematian: kematian.into(),
        }
    }

    #[test]
    fn test_credentials_are_trimmed() {
        let creds = validate_credentials("  budi ", " rahasia ").unwrap();
        assert_eq!(creds.username, "budi");
        assert_eq!(creds.password, "rahasia");
    }

    #[test]
    fn test_blank_credentials_are_rejected_in_order() {
        assert_eq!(validate_credentials("   ", ""), Err(LoginError::EmptyUsername));
        assert_eq!(validate_credentials("budi", "  "), Err(LoginError::EmptyPassword));
        assert_eq!(
            LoginError::EmptyUsername.to_string(),
            "Username harus diisi"
        );
    }

    #[test]
    fn test_report_builds_payload() {
        let daily = report("50.5", "120", "1,85", "2").validate().unwrap();
        assert_eq!(
            daily,
            DailyReport {
                konsumsi_pakan: 50.5,
                konsumsi_air: 120.0,
                rata_rata_bobot: 1.85,
                jumlah_kematian: 2,
            }
        );
    }

    #[test]
    fn test_report_field_errors() {
        assert_eq!(
            report("", "1", "1", "0").validate(),
            Err(FormError::Required("Jumlah pakan"))
        );
        assert_eq!(
            report("1", "banyak", "1", "0").validate(),
            Err(FormError::NotANumber("Jumlah minum"))
        );
        assert_eq!(
            report("1", "1", "-0.5", "0").validate(),
            Err(FormError::Negative("Bobot rata-rata"))
        );
        assert_eq!(
            report("1", "1", "1", "1.5").validate(),
            Err(FormError::NotAnInteger("Jumlah kematian"))
        );
    }

    #[test]
    fn test_request_requires_content() {
        assert_eq!(
            validate_request(RequestType::TambahKandang, "   "),
            Err(FormError::Required("Isi permintaan"))
        );
        let request = validate_request(RequestType::TambahPeternak, " Butuh 1 orang ").unwrap();
        assert_eq!(request.request_content, "Butuh 1 orang");
        assert_eq!(request.request_type, RequestType::TambahPeternak);
    }

    #[test]
    fn test_otp_must_be_six_digits() {
        assert_eq!(validate_otp(" 123456 ").as_deref(), Ok("123456"));
        assert_eq!(validate_otp("12345"), Err(FormError::InvalidOtp));
        assert_eq!(validate_otp("12a456"), Err(FormError::InvalidOtp));
    }

    #[test]
    fn test_phone_normalisation() {
        assert_eq!(validate_phone("0812-3456-7890").as_deref(), Ok("081234567890"));
        assert_eq!(validate_phone("+62 812 3456 789").as_deref(), Ok("+628123456789"));
        assert_eq!(validate_phone("12345"), Err(FormError::InvalidPhone));
        assert_eq!(validate_phone(" "), Err(FormError::Required("Nomor telepon")));
    }

    #[test]
    fn test_config_value() {
        assert_eq!(parse_config_value("Suhu Minimum", "27.5"), Ok(27.5));
        assert_eq!(
            parse_config_value("Suhu Minimum", "abc"),
            Err(FormError::NotANumber("Suhu Minimum"))
        );
    }
}
