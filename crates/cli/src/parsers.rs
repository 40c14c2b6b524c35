use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// `--timestamp` value: the generation time stamped into rendered headers.
#[derive(Debug, Clone, Copy)]
pub struct TimestampArg(pub DateTime<Local>);

const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

impl std::str::FromStr for TimestampArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Local)));
        }

        let naive = LOCAL_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| format!("日時として解釈できません: {s}"))?;

        Local
            .from_local_datetime(&naive)
            .single()
            .map(Self)
            .ok_or_else(|| format!("ローカル時刻が一意に決まりません: {s}"))
    }
}

/// Parse a non-empty charset name for `--lookup`.
///
/// # Errors
/// Returns an error if the input is blank.
pub fn parse_charset_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("charset name must not be empty".to_string());
    }
    Ok(name.to_string())
}
