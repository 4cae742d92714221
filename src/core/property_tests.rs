#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use super::{
    PageOptions,
    filters::{LevelFilter, PaymentFilter},
    installments::{installments_page, totals},
    stats::percentage,
    students::{filter_by_level, join_classes, level_distribution, student_stats},
};
use crate::{
    entities::{Dataset, Gender, Installment, InstallmentStatus, Student, StudentStatus},
    test_utils::{create_test_installment, create_test_student, date, empty_dataset, reference_date},
};
use proptest::prelude::*;

const CLASS_IDS: [&str; 5] = ["C1", "C2", "C3", "C4", "C99"];

fn arb_status() -> impl Strategy<Value = InstallmentStatus> {
    prop_oneof![Just(InstallmentStatus::Paid), Just(InstallmentStatus::Unpaid)]
}

fn arb_installments() -> impl Strategy<Value = Vec<Installment>> {
    prop::collection::vec((0u64..5_000, arb_status(), 1u32..28), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (amount, status, day))| {
                create_test_installment(
                    &format!("R{i}"),
                    "S1",
                    "Febbraio",
                    amount,
                    date(2026, 2, day),
                    status,
                )
            })
            .collect()
    })
}

fn arb_students() -> impl Strategy<Value = Vec<Student>> {
    prop::collection::vec((0usize..CLASS_IDS.len(), any::<bool>(), any::<bool>()), 0..40)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (class, male, active))| {
                    create_test_student(
                        &format!("S{i}"),
                        "Studente",
                        if male { Gender::Male } else { Gender::Female },
                        CLASS_IDS[class],
                        if active {
                            StudentStatus::Active
                        } else {
                            StudentStatus::Inactive
                        },
                        date(2025, 9, 1),
                    )
                })
                .collect()
        })
}

fn dataset_with(students: Vec<Student>, installments: Vec<Installment>) -> Dataset {
    let mut dataset = empty_dataset();
    dataset.classes = crate::test_utils::sample_dataset().classes;
    dataset.students = students;
    dataset.installments = installments;
    dataset
}

fn level_filters(dataset: &Dataset) -> Vec<LevelFilter> {
    std::iter::once(LevelFilter::All)
        .chain(
            dataset
                .levels()
                .into_iter()
                .map(|level| LevelFilter::Level(level.to_string())),
        )
        .collect()
}

proptest! {
    #[test]
    fn paid_plus_unpaid_is_total(installments in arb_installments()) {
        let totals = totals(&installments);
        prop_assert_eq!(totals.paid_amount + totals.unpaid_amount, totals.total_amount);
        prop_assert_eq!(totals.paid_count + totals.unpaid_count, totals.count);
    }

    #[test]
    fn active_plus_inactive_is_total(students in arb_students()) {
        let stats = student_stats(&students, 2025);
        prop_assert_eq!(stats.active + stats.inactive, stats.total);
        prop_assert_eq!(stats.male + stats.female, stats.total);
    }

    #[test]
    fn percentage_is_monotonic_in_part(part in 0usize..1_000, extra in 0usize..1_000, whole in 1usize..5_000) {
        prop_assert!(percentage(part, whole, 1) <= percentage(part + extra, whole, 1));
    }

    #[test]
    fn level_groups_sum_to_filtered_total(students in arb_students()) {
        let dataset = dataset_with(students, Vec::new());
        let rows = join_classes(&dataset);
        for filter in level_filters(&dataset) {
            let filtered = filter_by_level(&rows, &filter);
            let grouped: usize = level_distribution(&filtered).iter().map(|g| g.count).sum();
            prop_assert_eq!(grouped, filtered.len());
        }
    }

    #[test]
    fn student_appears_in_its_class(students in arb_students()) {
        let dataset = dataset_with(students, Vec::new());
        for student in &dataset.students {
            if let Some(class) = dataset.class_of(student) {
                prop_assert!(dataset.students_in_class(&class.id).any(|s| s.id == student.id));
            }
        }
    }

    #[test]
    fn scoped_totals_never_exceed_global(installments in arb_installments()) {
        let dataset = dataset_with(Vec::new(), installments);
        let options = PageOptions::at(reference_date());
        for filter in [PaymentFilter::All, PaymentFilter::Paid, PaymentFilter::Unpaid] {
            let page = installments_page(&dataset, filter, &options);
            prop_assert!(page.scoped.count <= page.global.totals.count);
            prop_assert!(page.scoped.total_amount <= page.global.totals.total_amount);
            prop_assert!(page.global.due_soon <= page.global.totals.unpaid_count);
        }
    }
}

#[test]
fn empty_dataset_renders_zero_rates() {
    let dataset = empty_dataset();
    let page = installments_page(&dataset, PaymentFilter::All, &PageOptions::at(reference_date()));
    assert_eq!(page.global.collection_rate, 0.0);
    assert!(page.rows.is_empty());
    assert!(!page.show_unpaid_alert);
}
