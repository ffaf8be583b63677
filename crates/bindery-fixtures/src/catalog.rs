//! Catalog seed planning.

use rand::seq::SliceRandom;
use rand::Rng;

use bindery_store::{role, CatalogSeed, NewBookbindingType, NewUser};

use crate::rules::CatalogRules;

/// Plan one catalog seed: 5-10 bookbinding styles (by default) plus the
/// merchant account that will own the shop.
///
/// Style names are sampled from the rule pool without replacement, so a
/// single seed never creates two styles with the same name.
pub fn plan_catalog<R: Rng + ?Sized>(
    rng: &mut R,
    rules: &CatalogRules,
    merchant_email: &str,
    merchant_name: &str,
) -> CatalogSeed {
    let type_count = rng.gen_range(rules.type_count.clone());
    let names: Vec<&str> = rules
        .type_names
        .choose_multiple(rng, type_count)
        .copied()
        .collect();

    let bookbinding_types = names
        .into_iter()
        .map(|name| NewBookbindingType {
            name: name.to_string(),
            is_available: rng.gen_bool(rules.available_chance),
        })
        .collect();

    let merchant = NewUser {
        email: merchant_email.to_string(),
        name: merchant_name.to_string(),
        role: role::MERCHANT.to_string(),
        is_onboarded: true,
        profile_url: None,
    };

    CatalogSeed {
        bookbinding_types,
        merchant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plan(seed: u64) -> CatalogSeed {
        let mut rng = StdRng::seed_from_u64(seed);
        plan_catalog(&mut rng, &CatalogRules::default(), "shop@example.com", "Copy Corner")
    }

    #[test]
    fn style_count_stays_in_range() {
        for seed in 0..100 {
            let catalog = plan(seed);
            assert!((5..=10).contains(&catalog.bookbinding_types.len()));
        }
    }

    #[test]
    fn style_names_come_from_the_pool_without_repeats() {
        let rules = CatalogRules::default();
        for seed in 0..100 {
            let catalog = plan(seed);
            let mut seen = HashSet::new();
            for style in &catalog.bookbinding_types {
                assert!(rules.type_names.contains(&style.name.as_str()));
                assert!(seen.insert(style.name.clone()));
            }
        }
    }

    #[test]
    fn merchant_is_an_onboarded_merchant() {
        let catalog = plan(7);
        assert_eq!(catalog.merchant.email, "shop@example.com");
        assert_eq!(catalog.merchant.name, "Copy Corner");
        assert_eq!(catalog.merchant.role, role::MERCHANT);
        assert!(catalog.merchant.is_onboarded);
        assert_eq!(catalog.merchant.profile_url, None);
    }
}
