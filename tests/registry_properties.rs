//! Property-based tests for registry invariants
//!
//! Uses proptest to check capacity, id stability, name lookup and copy
//! clamping across many random registries.

use progfs::{FileRegistry, FileType, ProgfsError};
use proptest::prelude::*;

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("/file{}.bin", i)).collect()
}

proptest! {
    #[test]
    fn prop_capacity_is_never_exceeded(
        capacity in 0u8..32,
        extra in 1usize..8
    ) {
        let data = vec![0u8; 4];
        let names = names(capacity as usize + extra);
        let mut fs = FileRegistry::new(capacity);

        for name in names.iter().take(capacity as usize) {
            prop_assert!(fs.register(name, &data).is_ok());
        }
        for name in names.iter().skip(capacity as usize) {
            let result = fs.register(name, &data);
            prop_assert!(
                matches!(result, Err(ProgfsError::CapacityExceeded { capacity: c }) if c == capacity),
                "Registration past capacity must fail"
            );
            prop_assert_eq!(fs.len(), capacity as usize);
        }
    }

    #[test]
    fn prop_ids_are_stable(
        files in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 1..40)
    ) {
        let names = names(files.len());
        let mut fs = FileRegistry::new(files.len() as u8);

        for (idx, (name, data)) in names.iter().zip(&files).enumerate() {
            let id = fs.register_typed(name, data, FileType::ALL[idx % 12]).unwrap();
            prop_assert_eq!(id as usize, idx);
        }

        for (idx, data) in files.iter().enumerate() {
            let record = fs.find_by_id(idx as u8).unwrap();
            prop_assert_eq!(record.name(), names[idx].as_str());
            prop_assert_eq!(record.data(), data.as_slice());
            prop_assert_eq!(record.file_type(), FileType::ALL[idx % 12]);
        }
        prop_assert!(fs.find_by_id(files.len() as u8).is_none());
    }

    #[test]
    fn prop_name_lookup_returns_lowest_id(
        picks in prop::collection::vec(0usize..5, 1..30)
    ) {
        // Names drawn from a small pool so duplicates are common
        let pool: Vec<String> = (0..5).map(|i| format!("name{}", i)).collect();
        let bodies: Vec<Vec<u8>> = (0..picks.len()).map(|i| vec![i as u8]).collect();
        let mut fs = FileRegistry::new(picks.len() as u8);

        for (pick, body) in picks.iter().zip(&bodies) {
            fs.register(&pool[*pick], body).unwrap();
        }

        for (slot, name) in pool.iter().enumerate() {
            let expected = picks.iter().position(|p| *p == slot);
            let found = fs.id_of(name);
            prop_assert_eq!(found.map(usize::from), expected);
            if let Some(first) = expected {
                prop_assert_eq!(fs.find_by_name(name).unwrap().data(), bodies[first].as_slice());
            }
        }
        prop_assert!(fs.find_by_name("name5").is_none());
    }

    #[test]
    fn prop_copy_clamps_to_file_end(
        data in prop::collection::vec(any::<u8>(), 0..256),
        start_frac in 0.0f64..=1.0,
        chunk in 0usize..512
    ) {
        let size = data.len();
        let start = ((size as f64) * start_frac) as usize;
        let mut fs = FileRegistry::new(1);
        let id = fs.register("blob", &data).unwrap();
        let mut buf = vec![0u8; 512];

        let copied = fs.copy(id, &mut buf, start, chunk).unwrap();

        if start + chunk >= size {
            prop_assert_eq!(copied, size - start);
        } else {
            prop_assert_eq!(copied, chunk);
        }
        prop_assert_eq!(&buf[..copied], &data[start..start + copied]);
    }

    #[test]
    fn prop_copy_past_end_is_rejected(
        data in prop::collection::vec(any::<u8>(), 0..64),
        beyond in 1usize..64,
        chunk in 0usize..64
    ) {
        let mut fs = FileRegistry::new(1);
        fs.register("blob", &data).unwrap();
        let mut buf = vec![0u8; 64];

        let result = fs.copy("blob", &mut buf, data.len() + beyond, chunk);
        prop_assert!(
            matches!(result, Err(ProgfsError::OffsetOutOfRange { .. })),
            "Start past end must be rejected"
        );
        prop_assert!(buf.iter().all(|&b| b == 0));
    }
}
