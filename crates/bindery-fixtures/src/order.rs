//! Order fixture planning.
//!
//! [`plan_order`] draws every random choice up front and returns a
//! fully-decided [`OrderTree`].  Service/file associations are decided here
//! too: bookbinding covers every file, lamination covers each file with an
//! independent coin flip.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use bindery_store::{
    service_type, status, NewFile, NewService, NewStatusUpdate, OrderTree, ServiceFileLink,
};

use crate::rules::OrderRules;

/// Plan one order tree for the given order number.
///
/// `created_at` becomes the order's creation timestamp; the status history
/// starts there (`reviewing`) and advances through `processing`, `ready`
/// and `completed` at randomized offsets whose ranges never overlap, so the
/// four timestamps are strictly increasing.
pub fn plan_order<R: Rng + ?Sized>(
    rng: &mut R,
    rules: &OrderRules,
    order_number: &str,
    created_at: DateTime<Utc>,
) -> OrderTree {
    let status_updates = vec![
        NewStatusUpdate {
            status: status::REVIEWING.to_string(),
            created_at,
        },
        NewStatusUpdate {
            status: status::PROCESSING.to_string(),
            created_at: created_at + Duration::minutes(rng.gen_range(rules.processing_after.clone())),
        },
        NewStatusUpdate {
            status: status::READY.to_string(),
            created_at: created_at + Duration::minutes(rng.gen_range(rules.ready_after.clone())),
        },
        NewStatusUpdate {
            status: status::COMPLETED.to_string(),
            created_at: created_at + Duration::minutes(rng.gen_range(rules.completed_after.clone())),
        },
    ];

    let file_count = rng.gen_range(rules.file_count.clone());
    let files: Vec<NewFile> = (0..file_count)
        .map(|idx| {
            let filetype = *rules
                .filetypes
                .choose(rng)
                .expect("rules.filetypes must not be empty");
            NewFile {
                idx: idx as i64,
                object_id: random_object_id(rng),
                filename: format!(
                    "print-job-{}.{filetype}",
                    rng.gen_range(rules.filename_tag.clone())
                ),
                filetype: filetype.to_string(),
                filesize: rng.gen_range(rules.filesize.clone()),
                is_colour: rng.gen_bool(rules.colour_chance),
            }
        })
        .collect();

    let services: Vec<NewService> = if rng.gen_bool(rules.service_chance) {
        let service_count = rng.gen_range(rules.service_count.clone());
        (0..service_count)
            .map(|idx| {
                if idx == 0 {
                    let binding = *rules
                        .binding_types
                        .choose(rng)
                        .expect("rules.binding_types must not be empty");
                    NewService {
                        idx: 0,
                        service_type: binding.to_string(),
                        bookbinding_type_id: Some(
                            rng.gen_range(rules.binding_catalog_ids.clone()),
                        ),
                    }
                } else {
                    NewService {
                        idx: idx as i64,
                        service_type: service_type::LAMINATE.to_string(),
                        bookbinding_type_id: None,
                    }
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut links = Vec::new();
    for (service_pos, service) in services.iter().enumerate() {
        for file_pos in 0..files.len() {
            if service.is_bookbinding() || rng.gen_bool(rules.laminate_link_chance) {
                links.push(ServiceFileLink {
                    service_pos,
                    file_pos,
                });
            }
        }
    }

    OrderTree {
        order_number: order_number.to_string(),
        status: status::COMPLETED.to_string(),
        price: rng.gen_range(rules.price.clone()),
        created_at,
        status_updates,
        files,
        services,
        links,
    }
}

/// A fresh 128-bit random object identifier, hex-encoded.
fn random_object_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEEDS: u64 = 200;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    fn plan(seed: u64) -> OrderTree {
        let mut rng = StdRng::seed_from_u64(seed);
        plan_order(&mut rng, &OrderRules::default(), "ORD-0001", t0())
    }

    #[test]
    fn price_and_file_count_stay_in_range() {
        for seed in 0..SEEDS {
            let tree = plan(seed);
            assert!((5..=80).contains(&tree.price));
            assert!((3..=6).contains(&tree.files.len()));
            assert_eq!(tree.status, status::COMPLETED);
        }
    }

    #[test]
    fn status_history_progresses_in_order() {
        for seed in 0..SEEDS {
            let tree = plan(seed);
            let labels: Vec<&str> = tree
                .status_updates
                .iter()
                .map(|u| u.status.as_str())
                .collect();
            assert_eq!(
                labels,
                [
                    status::REVIEWING,
                    status::PROCESSING,
                    status::READY,
                    status::COMPLETED
                ]
            );

            assert_eq!(tree.status_updates[0].created_at, tree.created_at);
            for pair in tree.status_updates.windows(2) {
                assert!(pair[0].created_at < pair[1].created_at);
            }
            // The history ends in the order's terminal status.
            assert_eq!(tree.status_updates.last().unwrap().status, tree.status);
        }
    }

    #[test]
    fn files_are_contiguous_with_unique_object_ids() {
        let mut seen_ids = HashSet::new();
        for seed in 0..SEEDS {
            let tree = plan(seed);
            for (expected_idx, file) in tree.files.iter().enumerate() {
                assert_eq!(file.idx, expected_idx as i64);
                assert_eq!(file.object_id.len(), 32);
                assert!(file.object_id.chars().all(|c| c.is_ascii_hexdigit()));
                assert!(seen_ids.insert(file.object_id.clone()));
                assert!(["pdf", "png", "jpg"].contains(&file.filetype.as_str()));
                assert!((1_000..=50_000_000).contains(&file.filesize));
                assert!(file.filename.ends_with(&file.filetype));
            }
        }
    }

    #[test]
    fn services_keep_their_fixed_shape() {
        for seed in 0..SEEDS {
            let tree = plan(seed);
            assert!(tree.services.len() <= 2);

            for (pos, service) in tree.services.iter().enumerate() {
                assert_eq!(service.idx, pos as i64);
                if pos == 0 {
                    assert!(service.is_bookbinding());
                    let id = service.bookbinding_type_id.unwrap();
                    assert!((1..=5).contains(&id));
                } else {
                    assert_eq!(service.service_type, service_type::LAMINATE);
                    assert_eq!(service.bookbinding_type_id, None);
                }
            }

            if tree.services.is_empty() {
                assert!(tree.links.is_empty());
            }
        }
    }

    #[test]
    fn bookbinding_links_cover_every_file() {
        for seed in 0..SEEDS {
            let tree = plan(seed);
            for (service_pos, service) in tree.services.iter().enumerate() {
                if !service.is_bookbinding() {
                    continue;
                }
                for file_pos in 0..tree.files.len() {
                    assert!(
                        tree.links
                            .iter()
                            .any(|l| l.service_pos == service_pos && l.file_pos == file_pos),
                        "seed {seed}: file {file_pos} missing its bookbinding link"
                    );
                }
            }
        }
    }

    #[test]
    fn links_reference_known_positions_without_duplicates() {
        for seed in 0..SEEDS {
            let tree = plan(seed);
            let mut seen = HashSet::new();
            for link in &tree.links {
                assert!(link.service_pos < tree.services.len());
                assert!(link.file_pos < tree.files.len());
                assert!(seen.insert((link.service_pos, link.file_pos)));
            }
        }
    }

    #[test]
    fn both_service_branches_occur_across_seeds() {
        let with_services = (0..SEEDS).filter(|&s| !plan(s).services.is_empty()).count();
        assert!(with_services > 0);
        assert!(with_services < SEEDS as usize);
    }

    #[test]
    fn same_seed_reproduces_the_same_plan() {
        assert_eq!(plan(17), plan(17));
        assert_ne!(plan(17), plan(18));
    }
}
