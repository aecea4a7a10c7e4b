use pk_paged::PagedList;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn window_never_exceeds_page_size(
        len in 0..500usize,
        page_index in 0..64i64,
        page_size in 1..64i64,
    ) {
        let source: Vec<u32> = (0..len as u32).collect();
        let page = PagedList::from_slice(&source, page_index, page_size).unwrap();

        prop_assert!(page.len() as i64 <= page_size);
        prop_assert_eq!(page.total_count(), len as i64);
    }

    #[test]
    fn total_pages_has_ceiling_semantics(
        total_count in 0..1_000_000i64,
        page_size in 1..10_000i64,
    ) {
        let page = PagedList::<u8>::from_parts([], 0, page_size, total_count).unwrap();

        let expected = (total_count + page_size - 1) / page_size;
        prop_assert_eq!(page.total_pages(), expected);
    }

    #[test]
    fn page_number_round_trips(page_index in 0..1_000_000i64, number in -1_000..1_000i64) {
        let mut page = PagedList::<u8>::from_parts([], page_index, 10, 0).unwrap();
        prop_assert_eq!(page.page_number(), page_index + 1);

        page.set_page_number(number);
        prop_assert_eq!(page.page_index(), number - 1);
    }

    #[test]
    fn the_last_page_has_no_next(total_count in 1..100_000i64, page_size in 1..1_000i64) {
        let last = {
            let probe = PagedList::<u8>::from_parts([], 0, page_size, total_count).unwrap();
            probe.total_pages() - 1
        };
        let page = PagedList::<u8>::from_parts([], last, page_size, total_count).unwrap();

        prop_assert!(page.is_last_page());
        prop_assert!(!page.has_next_page());
    }

    #[test]
    fn item_indices_cover_the_window(
        len in 1..500usize,
        page_index in 0..32i64,
        page_size in 1..32i64,
    ) {
        let source: Vec<u32> = (0..len as u32).collect();
        let page = PagedList::from_slice(&source, page_index, page_size).unwrap();

        if !page.is_empty() {
            // Indices are one-based and absolute within the whole collection.
            prop_assert_eq!(page.first_item_index(), page_index * page_size + 1);
            prop_assert_eq!(
                page.last_item_index() - page.first_item_index() + 1,
                page.len() as i64
            );
            prop_assert_eq!(page[0] as i64, page.first_item_index() - 1);
        }
    }
}
