#[cfg(test)]
mod tests {
    use dtrack::libs::calendar::{dated_items, items_by_day, month_cells, upcoming_goals, ItemKind};
    use dtrack::libs::document::Document;
    use dtrack::libs::goal::Goal;
    use dtrack::libs::period::YearMonth;

    fn march() -> YearMonth {
        YearMonth::new(2026, 3).unwrap()
    }

    fn sample_document() -> Document {
        let mut doc = Document::default();
        doc.add_goal(Goal::new("Marathon", Some("2026-03-15"), None, 1).unwrap());
        doc.add_goal(Goal::new("Book", Some("2026-04-01"), None, 2).unwrap());
        doc.add_goal(Goal::new("No date", None, None, 3).unwrap());

        doc.week_mut("2026-03-09").set_deadline(Some("2026-03-15")).unwrap();
        let untitled = doc.week_mut("2026-03-02");
        untitled.set_title("").unwrap();
        untitled.set_deadline(Some("2026-03-06")).unwrap();

        doc.month_mut("2026-03").set_deadline(Some("2026-03-15")).unwrap();
        doc.month_mut("2026-02").set_deadline(Some("2026-02-28")).unwrap();
        doc
    }

    #[test]
    fn test_items_only_from_displayed_month() {
        let doc = sample_document();
        let by_day = items_by_day(&doc, march());

        assert_eq!(by_day.keys().copied().collect::<Vec<_>>(), vec![6, 15]);
        for items in by_day.values() {
            assert!(items.iter().all(|i| i.date_iso.starts_with("2026-03-")));
        }
    }

    #[test]
    fn test_day_order_goals_weeks_months() {
        let doc = sample_document();
        let by_day = items_by_day(&doc, march());

        let kinds: Vec<ItemKind> = by_day[&15].iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![ItemKind::Goal, ItemKind::Week, ItemKind::Month]);

        let titles: Vec<&str> = by_day[&15].iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Marathon", "This Week", "Month 2026-03"]);
    }

    #[test]
    fn test_untitled_week_label() {
        let doc = sample_document();
        let by_day = items_by_day(&doc, march());
        assert_eq!(by_day[&6][0].title, "Week");
        assert_eq!(by_day[&6][0].id, "2026-03-02");
    }

    #[test]
    fn test_undated_items_are_skipped() {
        let doc = sample_document();
        let items = dated_items(&doc);
        assert!(items.iter().all(|i| i.title != "No date"));
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn test_month_cells_monday_first() {
        // 1 March 2026 is a Sunday.
        let cells = month_cells(march());
        assert_eq!(cells.len() % 7, 0);
        assert_eq!(&cells[..7], &[None, None, None, None, None, None, Some(1)]);
        assert_eq!(cells.iter().flatten().count(), 31);
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[36], Some(31));
        assert_eq!(cells[37..], [None; 5]);
    }

    #[test]
    fn test_month_cells_without_padding() {
        // February 2027 starts on a Monday and has exactly four weeks.
        let cells = month_cells(YearMonth::new(2027, 2).unwrap());
        assert_eq!(cells.len(), 28);
        assert_eq!(cells[0], Some(1));
        assert_eq!(cells[27], Some(28));
    }

    #[test]
    fn test_upcoming_goals_sorted_and_limited() {
        let mut doc = Document::default();
        doc.add_goal(Goal::new("late", Some("2026-12-01"), None, 1).unwrap());
        doc.add_goal(Goal::new("early", Some("2026-01-10"), None, 2).unwrap());
        doc.add_goal(Goal::new("middle", Some("2026-06-30"), None, 3).unwrap());
        doc.week_mut("2026-01-05").set_deadline(Some("2026-01-01")).unwrap();

        let upcoming = upcoming_goals(&doc, 25);
        let titles: Vec<&str> = upcoming.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["early", "middle", "late"]);

        assert_eq!(upcoming_goals(&doc, 2).len(), 2);
    }
}
