//! Dataset builder.
//!
//! Joins the seder, tractate, and chapter-count tables into the nested
//! [`Document`]. The join is a single pass over the input lists in
//! declaration order; sequence numbers are 1-based positions.

use indexmap::IndexMap;
use tracing::{debug, instrument};

use mishnah_shared::{Chapter, Document, Metadata, Order, Tractate};

use crate::tables::SourceTables;

/// Counts describing a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub orders: usize,
    pub tractates: usize,
    pub chapters: usize,
    pub mishnayot: u64,
    /// Tractates that had no chapter-count entry and were emitted empty.
    pub tractates_without_counts: Vec<String>,
}

/// Build the document from the compiled-in tables.
pub fn build_embedded() -> Document {
    build(&SourceTables::embedded())
}

/// Build the document from the given tables.
///
/// A tractate missing from the chapter-count table gets zero chapters.
#[instrument(skip_all, fields(sedarim = tables.sedarim.len()))]
pub fn build(tables: &SourceTables) -> Document {
    let orders = tables
        .sedarim
        .iter()
        .zip(1u32..)
        .map(|(&(canonical, local), seq)| {
            let order = build_order(tables, seq, canonical, local);
            debug!(
                seder = canonical,
                order = seq,
                tractates = order.tractates.len(),
                "seder assembled"
            );
            (canonical.to_string(), order)
        })
        .collect();

    Document { orders }
}

/// Tally a built document.
pub fn summarize(tables: &SourceTables, document: &Document) -> BuildSummary {
    let mut summary = BuildSummary {
        orders: document.orders.len(),
        ..Default::default()
    };

    for (_, tractate) in document.tractates() {
        summary.tractates += 1;
        summary.chapters += tractate.chapters.len();
        summary.mishnayot += u64::from(tractate.unit_total());

        let name = &tractate.metadata.canonical_name;
        if tables.chapter_counts_of(name).is_none() {
            summary.tractates_without_counts.push(name.clone());
        }
    }

    summary
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_order(tables: &SourceTables, seq: u32, canonical: &str, local: &str) -> Order {
    let tractates: IndexMap<String, Tractate> = tables
        .tractates_of(canonical)
        .iter()
        .zip(1u32..)
        .map(|(&(name, local_name), tractate_seq)| {
            (
                name.to_string(),
                build_tractate(tables, tractate_seq, name, local_name),
            )
        })
        .collect();

    Order {
        metadata: metadata(seq, canonical, local),
        tractates,
    }
}

fn build_tractate(tables: &SourceTables, seq: u32, canonical: &str, local: &str) -> Tractate {
    let counts: &[u32] = match tables.chapter_counts_of(canonical) {
        Some(counts) => counts,
        None => {
            debug!(tractate = canonical, "no chapter counts, emitting zero chapters");
            &[]
        }
    };

    let chapters = counts
        .iter()
        .zip(1u32..)
        .map(|(&count, number)| (number, Chapter::new(number, count)))
        .collect();

    Tractate {
        metadata: metadata(seq, canonical, local),
        chapters,
    }
}

fn metadata(seq: u32, canonical: &str, local: &str) -> Metadata {
    Metadata {
        sequence_number: seq,
        local_name: local.to_string(),
        canonical_name: canonical.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CHAPTER_COUNTS, ChapterCounts, NamePair, SederTractates};

    #[test]
    fn order_sequence_numbers_follow_declaration() {
        let doc = build_embedded();
        let seqs: Vec<u32> = doc.orders.values().map(|o| o.metadata.sequence_number).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4, 5, 6]);

        let names: Vec<&str> = doc.orders.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["Zeraim", "Moed", "Nashim", "Nezikin", "Kodashim", "Tohorot"]
        );
    }

    #[test]
    fn tractate_sequence_numbers_are_dense_per_order() {
        let tables = SourceTables::embedded();
        let doc = build(&tables);

        for (seder, order) in &doc.orders {
            let declared: Vec<&str> = tables.tractates_of(seder).iter().map(|(n, _)| *n).collect();
            let keys: Vec<&str> = order.tractates.keys().map(String::as_str).collect();
            assert_eq!(keys, declared, "tractate order in {seder}");

            let seqs: Vec<u32> = order
                .tractates
                .values()
                .map(|t| t.metadata.sequence_number)
                .collect();
            let expected: Vec<u32> = (1..=declared.len() as u32).collect();
            assert_eq!(seqs, expected, "sequence numbers in {seder}");
        }
    }

    #[test]
    fn chapters_mirror_count_table() {
        let doc = build_embedded();

        for (name, counts) in CHAPTER_COUNTS {
            let (_, tractate) = doc
                .tractates()
                .find(|(_, t)| t.metadata.canonical_name == *name)
                .expect("tractate present");

            let keys: Vec<u32> = tractate.chapters.keys().copied().collect();
            let expected: Vec<u32> = (1..=counts.len() as u32).collect();
            assert_eq!(keys, expected, "chapter keys of {name}");

            for (i, count) in counts.iter().enumerate() {
                let chapter = tractate.chapter(i as u32 + 1).expect("chapter present");
                assert_eq!(chapter.unit_count, *count, "{name} chapter {}", i + 1);
            }
        }
    }

    #[test]
    fn berakhot_scenario() {
        let doc = build_embedded();
        let zeraim = doc.order("Zeraim").expect("Zeraim");
        assert_eq!(zeraim.metadata.sequence_number, 1);
        assert_eq!(zeraim.metadata.local_name, "זרעים");

        let berakhot = zeraim.tractate("Berakhot").expect("Berakhot");
        assert_eq!(berakhot.metadata.sequence_number, 1);
        assert_eq!(berakhot.metadata.local_name, "ברכות");
        assert_eq!(berakhot.chapters.len(), 9);
        assert_eq!(berakhot.chapter(1).map(|c| c.unit_count), Some(5));
        assert_eq!(berakhot.chapter(2).map(|c| c.unit_count), Some(8));
        assert_eq!(berakhot.chapter(9).map(|c| c.unit_count), Some(5));
        assert_eq!(berakhot.chapter(9).map(|c| c.local_label.as_str()), Some("פרק 9"));
        assert_eq!(berakhot.chapter(10), None);
    }

    #[test]
    fn avot_scenario() {
        let doc = build_embedded();
        let avot = doc
            .order("Nezikin")
            .and_then(|o| o.tractate("Avot"))
            .expect("Avot");

        let counts: Vec<u32> = avot.chapters.values().map(|c| c.unit_count).collect();
        assert_eq!(counts, vec![18, 16, 18, 22, 23, 11]);
        assert_eq!(avot.chapter(5).map(|c| c.unit_count), Some(23));
        assert_eq!(avot.metadata.sequence_number, 9);
    }

    #[test]
    fn missing_counts_yield_zero_chapters() {
        const SEDARIM: &[NamePair] = &[("Zeraim", "זרעים")];
        const TRACTATES: &[SederTractates] =
            &[("Zeraim", &[("Berakhot", "ברכות"), ("Peah", "פאה")])];
        const COUNTS: &[ChapterCounts] = &[("Berakhot", &[5, 8])];

        let tables = SourceTables {
            sedarim: SEDARIM,
            tractates: TRACTATES,
            chapter_counts: COUNTS,
        };
        let doc = build(&tables);

        let peah = doc.order("Zeraim").and_then(|o| o.tractate("Peah")).expect("Peah");
        assert_eq!(peah.metadata.sequence_number, 2);
        assert!(peah.chapters.is_empty());

        let summary = summarize(&tables, &doc);
        assert_eq!(summary.tractates, 2);
        assert_eq!(summary.chapters, 2);
        assert_eq!(summary.mishnayot, 13);
        assert_eq!(summary.tractates_without_counts, vec!["Peah".to_string()]);
    }

    #[test]
    fn seder_without_tractate_list_is_empty() {
        const SEDARIM: &[NamePair] = &[("Moed", "מועד")];
        let tables = SourceTables {
            sedarim: SEDARIM,
            tractates: &[],
            chapter_counts: &[],
        };
        let doc = build(&tables);
        assert!(doc.order("Moed").expect("Moed").tractates.is_empty());
    }

    #[test]
    fn embedded_summary_totals() {
        let tables = SourceTables::embedded();
        let summary = summarize(&tables, &build(&tables));
        assert_eq!(summary.orders, 6);
        assert_eq!(summary.tractates, 63);
        assert_eq!(summary.chapters, 525);
        assert_eq!(summary.mishnayot, 4192);
        assert!(summary.tractates_without_counts.is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(build_embedded(), build_embedded());
    }
}
