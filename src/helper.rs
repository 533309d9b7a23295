use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::imgur::FetchError;

/// Headers authorizing an anonymous request for the given client id.
pub fn headers(client_id: &str) -> Result<HeaderMap<HeaderValue>, FetchError> {
    let mut headers = HeaderMap::with_capacity(1);

    let authorization = HeaderValue::from_str(&format!("Client-ID {client_id}"))
        .map_err(|err| FetchError::Failure(format!("invalid client id: {err}")))?;

    headers.append(AUTHORIZATION, authorization);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_authorization() {
        let headers = headers("abc123").unwrap();

        assert_eq!(headers[AUTHORIZATION], "Client-ID abc123");
    }

    #[test]
    fn rejects_control_characters() {
        assert!(matches!(headers("abc\n123"), Err(FetchError::Failure(_))));
    }
}
