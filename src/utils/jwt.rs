use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::models::auth::TokenPayload;

/// Decodifica los claims del segmento de payload de un JWT.
///
/// El token es opaco para el cliente: no se verifica la firma ni la
/// expiración (eso es trabajo del backend). Cualquier token malformado o
/// con claims de forma inesperada devuelve `None` y se trata como anónimo.
pub fn decode_token_payload(token: &str) -> Option<TokenPayload> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice::<TokenPayload>(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(claims: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("{}.{}.firma-no-verificada", header, payload)
    }

    #[test]
    fn decodifica_claims_validos() {
        let token = make_token(
            r#"{"sub":"marcial.diaz@gestorverde.cl","firstName":"Marcial","lastName":"Díaz"}"#,
        );
        let payload = decode_token_payload(&token).expect("payload válido");
        assert_eq!(payload.sub, "marcial.diaz@gestorverde.cl");
        assert_eq!(payload.full_name(), "Marcial Díaz");
    }

    #[test]
    fn token_malformado_se_trata_como_anonimo() {
        assert!(decode_token_payload("").is_none());
        assert!(decode_token_payload("no-es-un-jwt").is_none());
        assert!(decode_token_payload("a.%%%.c").is_none());
    }

    #[test]
    fn claims_con_forma_inesperada_fallan_cerrado() {
        // Falta firstName/lastName: el decode falla completo, no devuelve
        // una identidad a medias.
        let token = make_token(r#"{"sub":"a@b.com"}"#);
        assert!(decode_token_payload(&token).is_none());

        let token = make_token(r#"["no","es","objeto"]"#);
        assert!(decode_token_payload(&token).is_none());
    }
}
