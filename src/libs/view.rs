use crate::libs::formatter::format_minutes;
use crate::libs::slot::BreakSlot;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn slots(slots: &[BreakSlot]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TIME", "DURATION", "MESSAGE", "PATTERN", "ENABLED"]);
        for slot in slots {
            table.add_row(row![
                slot.id,
                slot.start_time.format("%H:%M"),
                format_minutes(slot.duration_minutes),
                slot.message,
                slot.repeat_pattern,
                if slot.enabled { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn issues(issues: &[String]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ISSUE"]);
        for (index, issue) in issues.iter().enumerate() {
            table.add_row(row![index + 1, issue]);
        }
        table.printstd();

        Ok(())
    }
}
