use super::*;
use httpsig_cavage::Config;
use httpsig_core::{Context, StaticEnv};
use pretty_assertions::assert_eq;

#[test]
fn test_signer_from_env() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        ("HTTPSIG_KEY_ID", "hmac-key"),
        ("HTTPSIG_KEY_TYPE", "hmac"),
        ("HTTPSIG_SECRET", "secret"),
        ("HTTPSIG_HEADERS", "(request-target) host date"),
    ]));
    let cfg = Config::new().from_env(&ctx)?;
    let signer = Signer::new(HeaderSigner::from_config(&cfg)?);

    let mut parts = basic_request();
    signer.sign(&mut parts)?;
    assert_eq!(
        parts.headers[http::header::AUTHORIZATION],
        r#"Signature keyId="hmac-key",algorithm="hmac-sha256",headers="(request-target) host date",signature="FbysVd+32UlMieBU7TuggTu5WZ8w//VIOXxA1u8lvTQ=""#
    );
    Ok(())
}

#[test]
fn test_signer_from_toml_with_env_override() -> Result<()> {
    let file = Config::from_toml(&format!(
        r#"
        key_id = "rsa-key"
        secret = """{RSA_PKCS8}"""
        algorithm = "rsa-sha512"
        headers = ["(request-target)", "host", "date"]
        "#
    ))?;
    let ctx = Context::new().with_env(StaticEnv::from_pairs([("HTTPSIG_ALGORITHM", "rsa-sha256")]));
    let cfg = Config::new().from_env(&ctx)?.merge(file);

    let signer = HeaderSigner::from_config(&cfg)?;
    assert_eq!(signer.algorithm(), Algorithm::RsaSha256);

    let mut parts = basic_request();
    Signer::new(signer).sign(&mut parts)?;
    assert_eq!(
        signature_param(parts.headers[http::header::AUTHORIZATION].to_str()?),
        "mRg0VwKM/stGL6OWecKnc9fqFGw8ArAJT/D9a/vjKYJRIvpPeMnaAUtXM3AeIQ8qKncJWl6rSDgrRYd8oQyjHO41iq9KXqa58ZEX5pf+SuYtvCEBYpZnCJ6qN0zgV4yfpr+FhkYpWzm1Z/93s0p6MqFH1W+nIAY/vZxbgol/YjVdrzTdgHkDupk6hF2SXzCud7mEMm5d6lang/d/M0J7fuTQ0Byr4WS6+CV9NJP1AlgxWe4SuS/hVZeFq830ONlqrN5KAJsBjxYR/AMCBZQgi5NI+euvFNpGR5nC2jYoQdjmXHYhNyZT0c2mf5ATdqZooPPIUErrntQSWC9IEPSNEw=="
    );
    Ok(())
}
