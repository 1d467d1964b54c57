#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use backup_core::codec::base64_encode;
    use backup_core::{
        decode_config, encode_config, CompressionScheme, DecodeError, DecodeParams, EncodeParams,
        EncryptionScheme,
    };

    const YAML: &[u8] = b"esphome:\n  name: kitchen-sensor\nwifi:\n  ssid: home\n";

    fn roundtrip(encryption: EncryptionScheme, compression: CompressionScheme, passphrase: &str) {
        let enc_params = EncodeParams::new(encryption, compression);
        let blob = encode_config("kitchen.yaml", YAML, passphrase, &enc_params).unwrap();

        let dec_params = DecodeParams::new(encryption, compression, "fallback-host");
        let file = decode_config(&blob, passphrase, &dec_params).unwrap();

        assert_eq!(file.filename, "kitchen.yaml");
        assert_eq!(file.content, YAML.to_vec());
    }

    // --- Full-stack roundtrips over every scheme combination ---

    #[test]
    fn plain_roundtrip() {
        roundtrip(EncryptionScheme::None, CompressionScheme::None, "");
    }

    #[test]
    fn gzip_roundtrip() {
        roundtrip(EncryptionScheme::None, CompressionScheme::Gzip, "");
    }

    #[test]
    fn xor_roundtrip() {
        roundtrip(EncryptionScheme::Xor, CompressionScheme::None, "pw");
    }

    #[test]
    fn xor_gzip_roundtrip() {
        roundtrip(EncryptionScheme::Xor, CompressionScheme::Gzip, "pw");
    }

    #[test]
    fn aes_roundtrip() {
        roundtrip(EncryptionScheme::Aes256Cbc, CompressionScheme::None, "hunter2");
    }

    #[test]
    fn aes_gzip_roundtrip() {
        // Compress-then-encrypt on the way in, decrypt-then-inflate on the way out.
        roundtrip(EncryptionScheme::Aes256Cbc, CompressionScheme::Gzip, "hunter2");
    }

    #[test]
    fn user_salt_roundtrip() {
        let enc_params =
            EncodeParams::new(EncryptionScheme::Aes256CbcUserSalt, CompressionScheme::Gzip)
                .with_user_salt(b"pepper".as_slice());
        let blob = encode_config("a.yaml", YAML, "pw", &enc_params).unwrap();

        let dec_params =
            DecodeParams::new(EncryptionScheme::Aes256CbcUserSalt, CompressionScheme::Gzip, "h")
                .with_user_salt(b"pepper".as_slice());
        let file = decode_config(&blob, "pw", &dec_params).unwrap();
        assert_eq!(file.content, YAML.to_vec());
    }

    // --- Failure paths ---

    #[test]
    fn malformed_base64_fails_first() {
        let params = DecodeParams::new(EncryptionScheme::None, CompressionScheme::None, "h");
        let result = decode_config("@@not-base64@@", "", &params);
        assert!(matches!(result, Err(DecodeError::InvalidEncoding(_))));
    }

    #[test]
    fn short_aes_blob_is_malformed_envelope() {
        let blob = base64_encode(&[0u8; 20]);
        let params = DecodeParams::new(EncryptionScheme::Aes256Cbc, CompressionScheme::None, "h");
        let result = decode_config(&blob, "pw", &params);
        assert!(matches!(result, Err(DecodeError::MalformedEnvelope { have: 20, need: 32 })));
    }

    #[test]
    fn wrong_xor_key_with_gzip_fails_decompression() {
        let enc_params = EncodeParams::new(EncryptionScheme::Xor, CompressionScheme::Gzip);
        let blob = encode_config("a.yaml", YAML, "right", &enc_params).unwrap();

        let dec_params = DecodeParams::new(EncryptionScheme::Xor, CompressionScheme::Gzip, "h");
        let result = decode_config(&blob, "wrong", &dec_params);
        assert!(
            matches!(result, Err(DecodeError::DecompressionFailure(_))),
            "a garbled gzip header is where a wrong XOR key surfaces"
        );
    }

    #[test]
    fn non_utf8_plaintext_is_invalid_text() {
        let blob = base64_encode(&[0xff, 0xfe, 0x00]);
        let params = DecodeParams::new(EncryptionScheme::None, CompressionScheme::None, "h");
        let result = decode_config(&blob, "", &params);
        assert!(matches!(result, Err(DecodeError::InvalidText)));
    }

    #[test]
    fn empty_content_is_rejected() {
        let enc_params = EncodeParams::new(EncryptionScheme::None, CompressionScheme::None);
        let blob = encode_config("empty.yaml", b"", "", &enc_params).unwrap();
        let params = DecodeParams::new(EncryptionScheme::None, CompressionScheme::None, "h");
        let result = decode_config(&blob, "", &params);
        assert!(
            matches!(result, Err(DecodeError::EmptyResult)),
            "empty output is never a legitimate success"
        );
    }

    #[test]
    fn empty_blob_is_rejected() {
        let params = DecodeParams::new(EncryptionScheme::None, CompressionScheme::None, "h");
        let result = decode_config("", "", &params);
        assert!(matches!(result, Err(DecodeError::EmptyResult)));
    }

    // --- Descriptor parsing at the boundary ---

    #[test]
    fn scheme_descriptors_parse() {
        assert_eq!(EncryptionScheme::from_str("none").unwrap(), EncryptionScheme::None);
        assert_eq!(EncryptionScheme::from_str("xor").unwrap(), EncryptionScheme::Xor);
        assert_eq!(EncryptionScheme::from_str("aes256").unwrap(), EncryptionScheme::Aes256Cbc);
        assert_eq!(
            EncryptionScheme::from_str("aes256-user-salt").unwrap(),
            EncryptionScheme::Aes256CbcUserSalt
        );
        assert_eq!(CompressionScheme::from_str("gzip").unwrap(), CompressionScheme::Gzip);
    }

    #[test]
    fn unknown_descriptors_are_rejected() {
        assert!(matches!(
            EncryptionScheme::from_str("rot13"),
            Err(DecodeError::UnknownEncryption { .. })
        ));
        assert!(matches!(
            CompressionScheme::from_str("zstd"),
            Err(DecodeError::UnknownCompression { .. })
        ));
    }

    #[test]
    fn error_kinds_are_stable() {
        assert_eq!(DecodeError::EmptyResult.kind(), "empty-result");
        assert_eq!(DecodeError::DecryptionFailure.kind(), "decryption-failure");
        assert_eq!(DecodeError::InvalidText.kind(), "invalid-text");
    }
}
