use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(Algorithm::HmacSha1, "1Eppal2AIbhc8Yv+srLBFIQMxBc="; "hmac sha1")]
#[test_case(Algorithm::HmacSha256, "FbysVd+32UlMieBU7TuggTu5WZ8w//VIOXxA1u8lvTQ="; "hmac sha256")]
#[test_case(
    Algorithm::HmacSha512,
    "2CTrennhyt8euQfx6gvenPsZIizm2cp7ztC5VKOY/RPMhS2u2VDP/xlhoqBXe9RpvXftGxCio5So7bkyqUVzRw==";
    "hmac sha512"
)]
fn test_hmac_known_answer(alg: Algorithm, expected: &str) {
    let signer =
        init_signer("hmac-key", KeyMaterial::hmac("secret"), alg).expect("signer must build");

    let mut parts = basic_request();
    signer.sign(&mut parts).expect("sign must succeed");

    assert_eq!(
        parts.headers[AUTHORIZATION]
            .to_str()
            .expect("header must be ascii"),
        format!(
            r#"Signature keyId="hmac-key",algorithm="{alg}",headers="(request-target) host date",signature="{expected}""#
        )
    );
}

#[test]
fn test_hmac_into_signature_header() -> Result<()> {
    let signer = Signer::new(
        HeaderSigner::builder("hmac-key", KeyMaterial::hmac("secret"))
            .headers(BASIC_HEADERS)
            .sign_header("Signature")
            .build()?,
    );

    let mut parts = basic_request();
    signer.sign(&mut parts)?;

    assert!(!parts.headers.contains_key(AUTHORIZATION));
    assert_eq!(
        parts.headers["signature"],
        r#"keyId="hmac-key",algorithm="hmac-sha256",headers="(request-target) host date",signature="FbysVd+32UlMieBU7TuggTu5WZ8w//VIOXxA1u8lvTQ=""#
    );
    Ok(())
}
