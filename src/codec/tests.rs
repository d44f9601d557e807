#[cfg(test)]
mod tests {
    use crate::{CameraParameters, ParamsError, ParamsParser, ParamsWriter};
    use bytes::{Bytes, BytesMut};

    fn entries(params: &CameraParameters) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_flatten_in_insertion_order() {
        let mut params = CameraParameters::new();
        params.set("picture-format", "jpeg");
        params.set("jpeg-quality", "85");
        assert_eq!(params.flatten(), "picture-format=jpeg;jpeg-quality=85");
    }

    #[test]
    fn test_flatten_empty_store() {
        assert_eq!(CameraParameters::new().flatten(), "");
    }

    #[test]
    fn test_flatten_single_entry_has_no_trailing_delimiter() {
        let mut params = CameraParameters::new();
        params.set("zoom", "0");
        assert_eq!(params.flatten(), "zoom=0");
    }

    #[test]
    fn test_unflatten_basic() {
        let params = CameraParameters::from_flattened("preview-size=640x480;zoom=2;flash-mode=auto");
        assert_eq!(
            entries(&params),
            vec![
                ("preview-size".to_string(), "640x480".to_string()),
                ("zoom".to_string(), "2".to_string()),
                ("flash-mode".to_string(), "auto".to_string()),
            ]
        );
    }

    #[test]
    fn test_unflatten_empty_string() {
        let params = CameraParameters::from_flattened("");
        assert!(params.is_empty());
    }

    #[test]
    fn test_unflatten_replaces_existing_entries() {
        let mut params = CameraParameters::new();
        params.set("stale", "1");
        params.unflatten("fresh=2");
        assert_eq!(params.get("stale"), None);
        assert_eq!(params.get("fresh"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_unflatten_is_idempotent() {
        let input = "a=1;b=2;c=3";
        let mut once = CameraParameters::new();
        once.unflatten(input);
        let mut twice = CameraParameters::new();
        twice.unflatten(input);
        twice.unflatten(input);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unflatten_drops_trailing_garbage() {
        let params = CameraParameters::from_flattened("a=1;b=2;dangling");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("b"), Some("2"));
        assert!(!params.contains_key("dangling"));
    }

    #[test]
    fn test_unflatten_trailing_delimiter() {
        let params = CameraParameters::from_flattened("a=1;");
        assert_eq!(entries(&params), vec![("a".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_unflatten_no_equals_at_all() {
        let params = CameraParameters::from_flattened("just some text;more");
        assert!(params.is_empty());
    }

    #[test]
    fn test_unflatten_value_may_contain_equals_before_semicolon() {
        // the value runs to the next ';', it is not re-split on '='
        let params = CameraParameters::from_flattened("a=x=y;b=2");
        assert_eq!(params.get("a"), Some("x=y"));
        assert_eq!(params.get("b"), Some("2"));
    }

    #[test]
    fn test_unflatten_key_may_contain_semicolon() {
        let params = CameraParameters::from_flattened("x;y=1");
        assert_eq!(params.get("x;y"), Some("1"));
    }

    #[test]
    fn test_unflatten_empty_value() {
        let params = CameraParameters::from_flattened("a=;b=2");
        assert!(params.contains_key("a"));
        assert_eq!(params.get("a"), None);
        assert_eq!(params.flatten(), "a=;b=2");
    }

    #[test]
    fn test_unflatten_duplicate_keys_last_write_wins() {
        let params = CameraParameters::from_flattened("a=1;b=2;a=3");
        assert_eq!(
            entries(&params),
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_round_trip_preserves_entries_and_order() {
        let mut params = CameraParameters::new();
        params.set("whitebalance", "auto");
        params.set_int("jpeg-quality", 90);
        params.set_float("focal-length", 3.5);
        params.set_size("picture-size", 2048, 1536);
        params.set_range("preview-fps-range", 15000, 30000);
        params.set("preview-size-values", "640x480,320x240");

        let decoded = CameraParameters::from_flattened(&params.flatten());
        assert_eq!(decoded, params);
        assert_eq!(decoded.flatten(), params.flatten());
    }

    #[test]
    fn test_size_flattens_to_substring() {
        let mut params = CameraParameters::new();
        params.set("other", "1");
        params.set_size("k", 640, 480);
        assert!(params.flatten().contains("k=640x480"));
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut params = CameraParameters::new();
        params.set("scene-mode", "night");
        params.set("zoom", "4");

        let mut buffer = BytesMut::new();
        params.to_bytes(&mut buffer).unwrap();
        assert_eq!(&buffer[..], b"scene-mode=night;zoom=4");

        let mut data = Bytes::from(buffer.to_vec());
        let decoded = CameraParameters::from_bytes(&mut data).unwrap();
        assert_eq!(decoded, params);
        assert!(data.is_empty());
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let mut data = Bytes::from(vec![b'a', b'=', 0xff, 0xfe]);
        let result = CameraParameters::from_bytes(&mut data);
        match result {
            Err(ParamsError::InvalidUtf8 { .. }) => {},
            other => panic!("Expected InvalidUtf8, got {:?}", other),
        }
    }
}
