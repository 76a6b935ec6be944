//! Semantic string generators.
//!
//! Shapes:
//! - email: `local@domain.tld`
//! - postal code: UK style, `AA9 9AA` or `AA99 9AA`
//! - phone number: UK mobile style, `07` followed by nine digits
//! - url: `https://www.domain.tld`

use model_core::SemanticKind;
use rand::Rng;

const TOP_LEVEL_DOMAINS: &[&str] = &["com", "co.uk", "net", "org", "io"];
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate a string of the given semantic kind.
pub fn random_semantic<R: Rng>(rng: &mut R, kind: SemanticKind) -> String {
    match kind {
        SemanticKind::EmailAddress => random_email(rng),
        SemanticKind::PostalCode => random_postal_code(rng),
        SemanticKind::PhoneNumber => random_phone_number(rng),
        SemanticKind::Url => random_url(rng),
    }
}

fn random_email<R: Rng>(rng: &mut R) -> String {
    let local = random_word(rng, 4, 10);
    let domain = random_word(rng, 4, 10);
    let tld = random_tld(rng);
    format!("{local}@{domain}.{tld}")
}

fn random_postal_code<R: Rng>(rng: &mut R) -> String {
    let area = random_word(rng, 2, 2).to_ascii_uppercase();
    let district_digits = rng.random_range(1..=2);
    let district = random_digits(rng, district_digits);
    let sector = random_digits(rng, 1);
    let unit = random_word(rng, 2, 2).to_ascii_uppercase();
    format!("{area}{district} {sector}{unit}")
}

fn random_phone_number<R: Rng>(rng: &mut R) -> String {
    format!("07{}", random_digits(rng, 9))
}

fn random_url<R: Rng>(rng: &mut R) -> String {
    let domain = random_word(rng, 4, 12);
    let tld = random_tld(rng);
    format!("https://www.{domain}.{tld}")
}

fn random_word<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    let length = rng.random_range(min..=max);
    (0..length)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}

fn random_tld<R: Rng>(rng: &mut R) -> &'static str {
    TOP_LEVEL_DOMAINS[rng.random_range(0..TOP_LEVEL_DOMAINS.len())]
}

/// Generate a random number with exactly N digits.
fn random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    (0..digits)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let email = random_semantic(&mut rng, SemanticKind::EmailAddress);
            let (local, domain) = email.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.contains('.'));
            assert!(!domain.starts_with('.'));
        }
    }

    #[test]
    fn test_postal_code_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let code = random_semantic(&mut rng, SemanticKind::PostalCode);
            let (outward, inward) = code.split_once(' ').unwrap();
            assert!((3..=4).contains(&outward.len()), "code {code}");
            assert!(outward[..2].chars().all(|c| c.is_ascii_uppercase()));
            assert!(outward[2..].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(inward.len(), 3);
            assert!(inward.starts_with(|c: char| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_phone_number_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let phone = random_semantic(&mut rng, SemanticKind::PhoneNumber);

        assert_eq!(phone.len(), 11);
        assert!(phone.starts_with("07"));
        assert!(phone.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_url_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let url = random_semantic(&mut rng, SemanticKind::Url);

        assert!(url.starts_with("https://www."));
        assert!(url["https://www.".len()..].contains('.'));
    }
}
