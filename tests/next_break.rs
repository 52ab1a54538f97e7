#[cfg(test)]
mod tests {
    use break_assistant::libs::slot::{BreakSlot, RepeatPattern};
    use break_assistant::libs::store::TimelineStore;
    use break_assistant::libs::timeline::{SlotPatch, Timeline};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct NextBreakTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for NextBreakTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            NextBreakTestContext { temp_dir }
        }
    }

    impl NextBreakTestContext {
        fn timeline(&self) -> Timeline {
            Timeline::new(TimelineStore::with_path(self.temp_dir.path().join("timeline.json")))
        }
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    // 2025-01-15 is a Wednesday, 2025-01-17 a Friday, 2025-01-18 a Saturday.
    fn wednesday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_time(at(hour, minute))
    }

    fn friday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap().and_time(at(hour, minute))
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_next_break_later_today(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(10, 30), 15, "", RepeatPattern::Daily, true).unwrap();

        let (slot, occurrence) = timeline.next_break(wednesday(8, 0)).unwrap();
        assert_eq!(slot.start_time, at(10, 30));
        assert_eq!(occurrence, wednesday(10, 30));
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_next_break_rolls_to_tomorrow(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(10, 30), 15, "", RepeatPattern::Daily, true).unwrap();

        // 11:00, today's occurrence already passed
        let (_, occurrence) = timeline.next_break(wednesday(11, 0)).unwrap();
        assert_eq!(occurrence, NaiveDate::from_ymd_opt(2025, 1, 16).unwrap().and_time(at(10, 30)));
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_exact_start_instant_is_not_a_future_occurrence(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(10, 30), 15, "", RepeatPattern::Daily, true).unwrap();

        // Occurrences are strictly after "now": at 10:30 sharp the engine
        // already points at tomorrow.
        let (_, occurrence) = timeline.next_break(wednesday(10, 30)).unwrap();
        assert_eq!(occurrence.date(), NaiveDate::from_ymd_opt(2025, 1, 16).unwrap());
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_two_day_horizon_weekdays_on_friday_evening(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(10, 30), 15, "", RepeatPattern::Weekdays, true).unwrap();

        // Friday 18:00: today's occurrence passed, tomorrow is Saturday.
        // The next real occurrence would be Monday, which is beyond the
        // lookahead horizon, so the engine reports nothing.
        assert!(timeline.next_break(friday(18, 0)).is_none());
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_weekend_slot_is_invisible_on_a_weekday(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(10, 30), 15, "", RepeatPattern::Weekends, true).unwrap();

        // Only slots active today enter the search, so a weekend slot
        // queried on Friday morning contributes nothing even though it
        // would fire on Saturday.
        assert!(timeline.next_break(friday(8, 0)).is_none());

        // On Saturday it is found
        let saturday = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap().and_time(at(8, 0));
        let (_, occurrence) = timeline.next_break(saturday).unwrap();
        assert_eq!(occurrence, NaiveDate::from_ymd_opt(2025, 1, 18).unwrap().and_time(at(10, 30)));
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_weekdays_slot_rolls_within_the_week(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(10, 30), 15, "", RepeatPattern::Weekdays, true).unwrap();

        // Wednesday evening rolls to Thursday, still a weekday
        let (_, occurrence) = timeline.next_break(wednesday(18, 0)).unwrap();
        assert_eq!(occurrence, NaiveDate::from_ymd_opt(2025, 1, 16).unwrap().and_time(at(10, 30)));
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_earliest_occurrence_wins(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(14, 0), 10, "afternoon", RepeatPattern::Daily, true).unwrap();
        timeline.add(at(10, 30), 10, "morning", RepeatPattern::Daily, true).unwrap();

        let (slot, _) = timeline.next_break(wednesday(8, 0)).unwrap();
        assert_eq!(slot.message, "morning");

        // A today-occurrence beats an earlier clock time that only fires
        // tomorrow
        let (slot, occurrence) = timeline.next_break(wednesday(12, 0)).unwrap();
        assert_eq!(slot.message, "afternoon");
        assert_eq!(occurrence, wednesday(14, 0));
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_disabled_slot_excluded_everywhere(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        let slot = timeline.add(at(10, 30), 15, "", RepeatPattern::Daily, true).unwrap();
        assert!(timeline.next_break(wednesday(8, 0)).is_some());
        assert_eq!(timeline.active_slots(wednesday(8, 0)).len(), 1);

        timeline
            .edit(
                &slot.id,
                SlotPatch {
                    enabled: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(timeline.next_break(wednesday(8, 0)).is_none());
        assert!(timeline.active_slots(wednesday(8, 0)).is_empty());
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_active_slots_by_pattern(ctx: &mut NextBreakTestContext) {
        let mut timeline = ctx.timeline();
        timeline.add(at(9, 0), 10, "daily", RepeatPattern::Daily, true).unwrap();
        timeline.add(at(11, 0), 10, "weekdays", RepeatPattern::Weekdays, true).unwrap();
        timeline.add(at(13, 0), 10, "weekends", RepeatPattern::Weekends, true).unwrap();
        timeline.add(at(15, 0), 10, "once", RepeatPattern::Once, true).unwrap();

        let weekday_active: Vec<_> = timeline.active_slots(wednesday(8, 0)).iter().map(|s| s.message.clone()).collect();
        assert_eq!(weekday_active, vec!["daily", "weekdays", "once"]);

        let saturday = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap().and_time(at(8, 0));
        let weekend_active: Vec<_> = timeline.active_slots(saturday).iter().map(|s| s.message.clone()).collect();
        assert_eq!(weekend_active, vec!["daily", "weekends", "once"]);
    }

    #[test]
    fn test_slot_end_time_wraps_without_day_carry() {
        // 23:50 + 30min "ends" at 00:20 on the same notional day's clock
        let slot = BreakSlot::new(at(23, 50), 30, "", RepeatPattern::Daily, true);
        assert_eq!(slot.end_time(), at(0, 20));
    }

    #[test_context(NextBreakTestContext)]
    #[test]
    fn test_empty_timeline_has_no_next_break(ctx: &mut NextBreakTestContext) {
        let timeline = ctx.timeline();
        assert!(timeline.next_break(wednesday(8, 0)).is_none());
    }
}
