use bytes::Bytes;
use serde_json::value::RawValue;

/// Request body: either nothing or a buffered payload
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Body {
    #[default]
    Empty,
    Bytes(Bytes),
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => write!(f, "Body::Empty"),
            Body::Bytes(bytes) => f.debug_tuple("Body::Bytes").field(&bytes.len()).finish(),
        }
    }
}

impl Body {
    /// Forward a raw JSON document verbatim
    pub fn from_raw_json(raw: &RawValue) -> Self {
        Body::Bytes(Bytes::copy_from_slice(raw.get().as_bytes()))
    }

    /// Buffered bytes, if any
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Empty => None,
            Body::Bytes(bytes) => Some(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_json_is_forwarded_verbatim() {
        let raw = RawValue::from_string(r#"{ "b": 2,  "a": 1 }"#.to_string()).unwrap();
        let body = Body::from_raw_json(&raw);
        assert_eq!(
            body.as_bytes().unwrap(),
            &Bytes::from_static(br#"{ "b": 2,  "a": 1 }"#)
        );
    }

    #[test]
    fn test_default_has_no_bytes() {
        assert_eq!(Body::default(), Body::Empty);
        assert!(Body::default().as_bytes().is_none());
    }
}
