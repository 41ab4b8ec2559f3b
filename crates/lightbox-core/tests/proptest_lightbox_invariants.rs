//! Property-based invariant tests for the lightbox state machine.
//!
//! Verifies:
//! 1. wrap_index always lands in [0, len) for non-empty sequences
//! 2. wrap_index is periodic with period len
//! 3. open(S, i) displays S[wrap(i)]
//! 4. len(S) calls to next() return to the starting index
//! 5. previous() undoes next() from any state
//! 6. Navigation controls are visible iff len(S) >= 2
//! 7. close() then open() never leaks the previous gallery into rendering
//! 8. Arbitrary command sequences keep the index in bounds while open

use lightbox_core::testing::RecordingTarget;
use lightbox_core::{Command, Gallery, GalleryId, ImageRef, LightboxController, wrap_index};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn make_gallery(id: usize, len: usize) -> Gallery {
    Gallery::new(
        GalleryId(id),
        (0..len)
            .map(|i| ImageRef::new(format!("/g{id}/{i}.jpg"), format!("g{id} image {i}")))
            .collect(),
    )
}

fn arb_gallery() -> impl Strategy<Value = Gallery> {
    (0usize..8, 1usize..=12).prop_map(|(id, len)| make_gallery(id, len))
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Close),
        Just(Command::Previous),
        Just(Command::Next),
    ]
}

fn open_at(gallery: &Gallery, index: i64) -> LightboxController<RecordingTarget> {
    let mut ctl = LightboxController::new(RecordingTarget::new());
    ctl.open(gallery, index);
    ctl
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wrap_in_bounds(index in any::<i64>(), len in 1usize..=10_000) {
        let w = wrap_index(index, len).expect("non-empty");
        prop_assert!(w < len);
    }

    #[test]
    fn wrap_is_periodic(index in -1_000_000i64..1_000_000, len in 1usize..=500) {
        let n = len as i64;
        prop_assert_eq!(wrap_index(index, len), wrap_index(index + n, len));
        prop_assert_eq!(wrap_index(index, len), wrap_index(index - n, len));
    }

    #[test]
    fn open_displays_wrapped_image(gallery in arb_gallery(), index in -100i64..100) {
        let ctl = open_at(&gallery, index);
        let expected = &gallery.images()[wrap_index(index, gallery.len()).expect("non-empty")];
        prop_assert_eq!(ctl.current_image(), Some(expected));
        prop_assert_eq!(ctl.target().presentation().source.as_str(), expected.source());
        prop_assert_eq!(ctl.target().presentation().caption.as_str(), expected.caption());
    }

    #[test]
    fn full_cycle_closes(gallery in arb_gallery(), index in -50i64..50) {
        let mut ctl = open_at(&gallery, index);
        let start = ctl.current_index();
        for _ in 0..gallery.len() {
            ctl.next();
        }
        prop_assert_eq!(ctl.current_index(), start);
    }

    #[test]
    fn previous_inverts_next(gallery in arb_gallery(), index in -50i64..50, moves in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut ctl = open_at(&gallery, index);
        for forward in moves {
            if forward { ctl.next() } else { ctl.previous() }
        }
        let before = ctl.current_index();
        ctl.next();
        ctl.previous();
        prop_assert_eq!(ctl.current_index(), before);
        ctl.previous();
        ctl.next();
        prop_assert_eq!(ctl.current_index(), before);
    }

    #[test]
    fn nav_visible_iff_multiple(gallery in arb_gallery(), index in -20i64..20) {
        let mut ctl = open_at(&gallery, index);
        prop_assert_eq!(ctl.target().presentation().nav_visible, gallery.len() >= 2);
        ctl.next();
        prop_assert_eq!(ctl.target().presentation().nav_visible, gallery.len() >= 2);
    }

    #[test]
    fn reopen_never_leaks(first in arb_gallery(), second in arb_gallery(), i in -20i64..20, j in -20i64..20) {
        let first = make_gallery(100 + first.id().0, first.len());
        let mut ctl = open_at(&first, i);
        ctl.next();
        ctl.close();
        ctl.open(&second, j);

        let shown = ctl.target().presentation().source.clone();
        prop_assert!(second.iter().any(|img| img.source() == shown));
        prop_assert!(!first.iter().any(|img| img.source() == shown));
        let active = ctl.state().active_sequence().expect("active");
        prop_assert!(active.shares_sequence(&second));
    }

    #[test]
    fn commands_keep_index_in_bounds(gallery in arb_gallery(), index in any::<i64>(), commands in prop::collection::vec(arb_command(), 0..40)) {
        let mut ctl = open_at(&gallery, index);
        for command in commands {
            ctl.apply(command);
            match ctl.current_index() {
                Some(i) => {
                    prop_assert!(ctl.is_open());
                    prop_assert!(i < gallery.len());
                    prop_assert!(ctl.target().presentation().overlay_visible);
                    prop_assert!(ctl.target().presentation().scroll_locked);
                }
                None => {
                    prop_assert!(!ctl.target().presentation().overlay_visible);
                    prop_assert!(!ctl.target().presentation().scroll_locked);
                }
            }
        }
    }
}
