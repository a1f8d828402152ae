#![allow(clippy::unwrap_used, clippy::expect_used)]

use surrogate_security::{
    AUTH_BIN_VERSION, AuthDecodeError, Authentication, GrantedAuthority, decode_bin, encode_bin,
};

#[test]
fn carries_principal_and_authorities_but_not_credentials() {
    let auth = Authentication::builder("tiffany")
        .authorities(["Power User", "Authenticated"])
        .credentials("password".to_owned())
        .build();

    let encoded = encode_bin(&auth).expect("authentication encodes");
    assert_eq!(encoded[0], AUTH_BIN_VERSION);

    let decoded = decode_bin(&encoded).expect("authentication decodes");

    assert_eq!(decoded.name(), "tiffany");
    assert!(decoded.is_authenticated());
    assert_eq!(
        decoded.authorities(),
        &[
            GrantedAuthority::new("Power User"),
            GrantedAuthority::new("Authenticated")
        ]
    );
    assert!(decoded.credentials().is_none());
}

#[test]
fn decode_rejects_unknown_version() {
    let mut encoded = encode_bin(&Authentication::anonymous()).expect("encodes");
    encoded[0] = AUTH_BIN_VERSION.wrapping_add(1);

    let err = decode_bin(&encoded).expect_err("version mismatch should error");
    assert!(
        matches!(err, AuthDecodeError::UnsupportedVersion { .. }),
        "expected version error, got: {err}"
    );
}

#[test]
fn decode_rejects_empty_and_truncated_input() {
    assert!(matches!(decode_bin(&[]), Err(AuthDecodeError::Empty)));

    let encoded = encode_bin(&Authentication::builder("joe").authority("Admin").build()).unwrap();
    let truncated = &encoded[..encoded.len() - 2];
    assert!(matches!(
        decode_bin(truncated),
        Err(AuthDecodeError::Postcard(_))
    ));
}
