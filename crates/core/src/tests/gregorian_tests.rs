// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{TODAY, create_test_generator, isos};
use crate::calendar::{CalendarKind, Clock};
use crate::{Period, PeriodGenerator, PeriodType};

#[test]
fn test_daily_leap_year_has_366_periods() {
    let periods: Vec<Period> = create_test_generator().daily(0).unwrap();

    assert_eq!(periods.len(), 366);
    assert_eq!(periods[0].start_date(), "2024-01-01");
    assert_eq!(periods[0].end_date(), "2024-01-01");
    assert_eq!(periods[0].name(), "2024-01-01");
    assert_eq!(periods[0].id(), "Daily_2024-01-01");
    assert_eq!(periods[59].iso(), "20240229");
    assert_eq!(periods[365].start_date(), "2024-12-31");
    assert_eq!(periods[365].end_date(), "2024-12-31");
}

#[test]
fn test_daily_common_year_has_365_periods() {
    assert_eq!(create_test_generator().daily(-1).unwrap().len(), 365);
}

#[test]
fn test_weekly_2024() {
    let periods: Vec<Period> = create_test_generator().weekly(0).unwrap();

    assert_eq!(periods.len(), 52);
    assert_eq!(periods[0].start_date(), "2024-01-01");
    assert_eq!(periods[0].end_date(), "2024-01-07");
    assert_eq!(periods[0].name(), "Week 1 - 2024-01-01 - 2024-01-07");
    assert_eq!(periods[0].id(), "Weekly_2024-01-01");
    assert_eq!(periods[0].iso(), "2024W1");

    let last: &Period = &periods[51];
    assert_eq!(last.iso(), "2024W52");
    assert_eq!(last.start_date(), "2024-12-23");
    assert_eq!(last.end_date(), "2024-12-29");
}

#[test]
fn test_weekly_2020_has_53_weeks() {
    let periods: Vec<Period> = create_test_generator().weekly(-4).unwrap();

    assert_eq!(periods.len(), 53);
    assert_eq!(periods[0].start_date(), "2019-12-30");
    assert_eq!(periods[52].iso(), "2020W53");
    assert_eq!(periods[52].end_date(), "2021-01-03");
}

#[test]
fn test_weekly_variants_start_on_their_weekday() {
    let generator: PeriodGenerator = create_test_generator();

    let cases = [
        (PeriodType::WeeklyWednesday, "2024-01-03", "2024WedW1", 52),
        (PeriodType::WeeklyThursday, "2024-01-04", "2024ThuW1", 52),
        (PeriodType::WeeklySaturday, "2023-12-30", "2024SatW1", 53),
        (PeriodType::WeeklySunday, "2023-12-31", "2024SunW1", 52),
    ];

    for (kind, first_start, first_iso, count) in cases {
        let periods: Vec<Period> = generator.generate_periods(kind, 0).unwrap();
        assert_eq!(periods.len(), count, "{kind}");
        assert_eq!(periods[0].start_date(), first_start, "{kind}");
        assert_eq!(periods[0].iso(), first_iso, "{kind}");
        assert_eq!(
            periods[0].id(),
            format!("{}_{first_start}", kind.as_str()),
            "{kind}"
        );
    }
}

#[test]
fn test_bi_weekly_2024() {
    let periods: Vec<Period> = create_test_generator().bi_weekly(0).unwrap();

    assert_eq!(periods.len(), 26);
    assert_eq!(periods[0].name(), "Bi-Week 1 - 2024-01-01 - 2024-01-14");
    assert_eq!(periods[0].id(), "BiWeekly_2024-01-01");
    assert_eq!(periods[0].iso(), "2024BiW1");
    assert_eq!(periods[25].start_date(), "2024-12-16");
    assert_eq!(periods[25].end_date(), "2024-12-29");
    assert_eq!(periods[25].iso(), "2024BiW26");
}

#[test]
fn test_monthly_2024() {
    let periods: Vec<Period> = create_test_generator().monthly(0).unwrap();

    assert_eq!(periods.len(), 12);
    assert_eq!(periods[1].id(), "Monthly_2024-02-01");
    assert_eq!(periods[1].iso(), "202402");
    assert_eq!(periods[1].end_date(), "2024-02-29");
    assert_eq!(periods[1].name(), "February 2024");
    assert_eq!(periods[11].iso(), "202412");
}

#[test]
fn test_monthly_offsets_shift_the_year() {
    let generator: PeriodGenerator = create_test_generator();
    assert_eq!(generator.monthly(-1).unwrap()[0].start_date(), "2023-01-01");
    assert_eq!(generator.monthly(1).unwrap()[0].iso(), "202501");
    assert_eq!(generator.monthly(-1).unwrap()[1].end_date(), "2023-02-28");
}

#[test]
fn test_bi_monthly_2024() {
    let periods: Vec<Period> = create_test_generator().bi_monthly(0).unwrap();

    assert_eq!(periods.len(), 6);
    assert_eq!(periods[0].start_date(), "2024-01-01");
    assert_eq!(periods[0].end_date(), "2024-02-29");
    assert_eq!(periods[0].name(), "January - February 2024");
    assert_eq!(
        isos(&periods),
        vec!["202401B", "202402B", "202403B", "202404B", "202405B", "202406B"]
    );
    assert_eq!(periods[5].end_date(), "2024-12-31");
}

#[test]
fn test_quarterly_2024() {
    let periods: Vec<Period> = create_test_generator().quarterly(0).unwrap();

    assert_eq!(isos(&periods), vec!["2024Q1", "2024Q2", "2024Q3", "2024Q4"]);
    assert_eq!(periods[2].name(), "July - September 2024");
    assert_eq!(periods[2].start_date(), "2024-07-01");
    assert_eq!(periods[2].end_date(), "2024-09-30");
}

#[test]
fn test_six_monthly_2024() {
    let periods: Vec<Period> = create_test_generator().six_monthly(0).unwrap();

    assert_eq!(isos(&periods), vec!["2024S1", "2024S2"]);
    assert_eq!(periods[0].name(), "January - June 2024");
    assert_eq!(periods[0].end_date(), "2024-06-30");
    assert_eq!(periods[1].name(), "July - December 2024");
    assert_eq!(periods[1].start_date(), "2024-07-01");
    assert_eq!(periods[1].end_date(), "2024-12-31");
}

#[test]
fn test_six_monthly_april_2024() {
    let periods: Vec<Period> = create_test_generator().six_monthly_april(0).unwrap();

    assert_eq!(isos(&periods), vec!["2024AprilS1", "2024AprilS2"]);
    assert_eq!(periods[0].name(), "April - September 2024");
    assert_eq!(periods[0].start_date(), "2024-04-01");
    assert_eq!(periods[0].end_date(), "2024-09-30");
    assert_eq!(periods[1].name(), "October 2024 - March 2025");
    assert_eq!(periods[1].start_date(), "2024-10-01");
    assert_eq!(periods[1].end_date(), "2025-03-31");
}

#[test]
fn test_six_monthly_nov_2024() {
    let periods: Vec<Period> = create_test_generator().six_monthly_nov(0).unwrap();

    assert_eq!(isos(&periods), vec!["2025NovS1", "2025NovS2"]);
    assert_eq!(periods[0].name(), "November 2024 - April 2025");
    assert_eq!(periods[0].start_date(), "2024-11-01");
    assert_eq!(periods[0].end_date(), "2025-04-30");
    assert_eq!(periods[0].id(), "SixMonthlyNov_2024-11-01");
    assert_eq!(periods[1].name(), "May 2025 - October 2025");
    assert_eq!(periods[1].end_date(), "2025-10-31");
}

#[test]
fn test_yearly_covers_five_years_each_side() {
    let periods: Vec<Period> = create_test_generator().yearly(0).unwrap();

    assert_eq!(periods.len(), 11);
    assert_eq!(periods[0].name(), "2019");
    assert_eq!(periods[0].id(), "Yearly_2019-01-01");
    assert_eq!(periods[0].end_date(), "2019-12-31");
    assert_eq!(periods[5].iso(), "2024");
    assert_eq!(periods[10].iso(), "2029");
}

#[test]
fn test_financial_july_2024() {
    let periods: Vec<Period> = create_test_generator().financial_july(0).unwrap();

    assert_eq!(periods.len(), 11);
    assert_eq!(periods[0].start_date(), "2019-07-01");
    assert_eq!(periods[0].end_date(), "2020-06-30");
    assert_eq!(periods[0].id(), "FinancialJuly_2019-07-01");
    assert_eq!(periods[0].iso(), "2019July");
    assert_eq!(periods[0].name(), "July 2019 - June 2020");
    assert_eq!(periods[10].start_date(), "2029-07-01");
    assert_eq!(periods[10].end_date(), "2030-06-30");
}

#[test]
fn test_financial_codes() {
    let generator: PeriodGenerator = create_test_generator();

    let april: Vec<Period> = generator.financial_april(0).unwrap();
    assert_eq!(april[5].start_date(), "2024-04-01");
    assert_eq!(april[5].end_date(), "2025-03-31");
    assert_eq!(april[5].iso(), "2024April");

    let october: Vec<Period> = generator.financial_oct(0).unwrap();
    assert_eq!(october[0].id(), "FinancialOct_2019-10-01");
    assert_eq!(october[0].iso(), "2019Oct");

    // November financial years are coded by the year they end in
    let november: Vec<Period> = generator.financial_nov(0).unwrap();
    assert_eq!(november[0].start_date(), "2019-11-01");
    assert_eq!(november[0].end_date(), "2020-10-31");
    assert_eq!(november[0].iso(), "2020Nov");
    assert_eq!(november[0].name(), "November 2019 - October 2020");
}

#[test]
fn test_reversed_monthly() {
    let generator: PeriodGenerator = create_test_generator();
    let reversed: Vec<Period> = generator
        .generate_reversed_periods(PeriodType::Monthly, 0)
        .unwrap();

    assert_eq!(reversed.len(), 12);
    assert_eq!(reversed[0].iso(), "202412");
    assert_eq!(reversed[11].iso(), "202401");
}

#[test]
fn test_custom_date_format_flows_into_ids_and_names() {
    let generator: PeriodGenerator = PeriodGenerator::builder()
        .calendar(CalendarKind::Gregorian.instance(Clock::Fixed(TODAY)))
        .date_format("dd/mm/yyyy")
        .build()
        .unwrap();

    let weeks: Vec<Period> = generator.weekly(0).unwrap();
    assert_eq!(weeks[0].start_date(), "01/01/2024");
    assert_eq!(weeks[0].name(), "Week 1 - 01/01/2024 - 07/01/2024");
    assert_eq!(weeks[0].id(), "Weekly_01/01/2024");
    // iso codes do not depend on the display format
    assert_eq!(weeks[0].iso(), "2024W1");
}

#[test]
fn test_periods_serialize_to_camel_case_json() {
    let periods: Vec<Period> = create_test_generator().monthly(0).unwrap();
    let json: serde_json::Value = serde_json::to_value(&periods[1]).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "startDate": "2024-02-01",
            "endDate": "2024-02-29",
            "name": "February 2024",
            "id": "Monthly_2024-02-01",
            "iso": "202402",
        })
    );
}
