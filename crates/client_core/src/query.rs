use url::form_urlencoded;

/// Outcome of the previous search navigation, decoded from the page address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    None,
    Error(i64),
    Success(i64),
}

/// Decodes a raw query string.
///
/// Recognized only when the string holds exactly one parameter and its name
/// is `error` or `success`; every other shape yields `None`. Values that are
/// not integers coerce to -1.
pub fn parse_outcome(query: &str) -> QueryOutcome {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    let [(key, value)] = pairs.as_slice() else {
        return QueryOutcome::None;
    };
    let code = value.parse::<i64>().unwrap_or(-1);
    match key.as_str() {
        "error" => QueryOutcome::Error(code),
        "success" => QueryOutcome::Success(code),
        _ => QueryOutcome::None,
    }
}

/// Accepts a full page address, absolute or site-relative.
pub fn parse_outcome_from_address(address: &str) -> QueryOutcome {
    match url::Url::parse(address) {
        Ok(parsed) => parse_outcome(parsed.query().unwrap_or_default()),
        Err(_) => match address.split_once('?') {
            Some((_, rest)) => parse_outcome(rest.split('#').next().unwrap_or("")),
            None => QueryOutcome::None,
        },
    }
}
