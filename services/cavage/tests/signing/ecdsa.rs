use super::*;
use pretty_assertions::assert_eq;
use httpsig_core::hash::base64_decode;
use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};
use p256::pkcs8::DecodePublicKey;

#[test]
fn test_ecdsa_signature_verifies() -> Result<()> {
    let public = VerifyingKey::from_public_key_pem(EC_PUBLIC).expect("public key must parse");

    for pem in [EC_PKCS8, EC_SEC1] {
        let signer = init_signer(
            "ec-key",
            KeyMaterial::ecdsa_from_pem(pem)?,
            Algorithm::EcdsaSha256,
        )?;
        let mut parts = basic_request();
        signer.sign(&mut parts)?;

        let value = parts.headers[AUTHORIZATION].to_str()?;
        assert!(
            value.starts_with(
                r#"Signature keyId="ec-key",algorithm="ecdsa-sha256",headers="(request-target) host date",signature=""#
            ),
            "{value}"
        );

        let raw = base64_decode(signature_param(value))?;
        let signature = Signature::from_der(&raw).expect("signature must be DER encoded");
        public
            .verify(BASIC_SIGNING_STRING.as_bytes(), &signature)
            .expect("signature must verify");
    }
    Ok(())
}

#[test]
fn test_ecdsa_is_deterministic() -> Result<()> {
    let signer = init_signer(
        "ec-key",
        KeyMaterial::ecdsa_from_pem(EC_PKCS8)?,
        Algorithm::EcdsaSha256,
    )?;

    let mut a = basic_request();
    signer.sign(&mut a)?;
    let mut b = basic_request();
    signer.sign(&mut b)?;
    assert_eq!(a.headers[AUTHORIZATION], b.headers[AUTHORIZATION]);
    Ok(())
}
