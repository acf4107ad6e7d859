//! Text rendering of monthly summaries and daily results.

use crate::models::summary::{AttendanceSummary, HoursSummary, IncomeSummary, Rank, RankLevel};
use crate::models::{DailyResult, LeaveBook, LeaveCategory, MonthlySummary, PayBucket};
use crate::utils::colors::{paint_amount, paint_late, paint_remote};
use crate::utils::date::weekday_label;
use crate::utils::table::Table;
use crate::utils::{fmt_hours, fmt_money};

const TIP_WIDTH: usize = 60;

/// Tier of the month's total overtime pay.
pub fn rank_for(total_overtime_pay: f64) -> Rank {
    let income = total_overtime_pay;

    let (level, message) = if income < 300.0 {
        (RankLevel::VeryLow, "李在赣神魔？".to_string())
    } else if income < 500.0 {
        (RankLevel::Low, "不太行".to_string())
    } else if income < 1000.0 {
        (RankLevel::Normal, "一般，建议多加点 冲1000".to_string())
    } else if income <= 1500.0 {
        (RankLevel::Good, "牛逼".to_string())
    } else if income < 2000.0 {
        (RankLevel::Excellent, "逆天".to_string())
    } else {
        (
            RankLevel::Expert,
            format!("你是懂加班的，白加了 {:.2} 元", income - 2000.0),
        )
    };

    Rank { level, message }
}

pub fn tips_for(
    income: &IncomeSummary,
    hours: &HoursSummary,
    attendance: &AttendanceSummary,
) -> Vec<String> {
    let mut tips = Vec::new();

    if income.total_overtime_pay < 500.0 {
        tips.push("建议：增加加班时长，提高收入水平".to_string());
    }
    if attendance.late_count > 5 {
        tips.push("注意：迟到次数较多，建议改善时间管理".to_string());
    }
    if attendance.early_leave_count > 3 {
        tips.push("注意：早退次数较多，建议合理安排工作时间".to_string());
    }
    if attendance.late_count > 0 && attendance.early_leave_count > 0 {
        tips.push("提醒：既有迟到又有早退，严重影响工时，建议调整作息".to_string());
    }
    if hours.total_hours > 80.0 {
        tips.push("关注：加班时长较高，注意身体健康".to_string());
    }

    tips
}

/// Income, hours and attendance tables followed by the rank and tips.
pub fn render_report(summary: &MonthlySummary, separator: char) -> String {
    let i = &summary.income;
    let h = &summary.hours;
    let a = &summary.attendance;

    let mut income = Table::new(vec!["项目", "金额"])
        .with_title(&format!("{} 收入统计", summary.month))
        .with_separator(separator);
    income.add_row(vec!["工作日加班费".into(), fmt_money(i.workday_overtime_pay)]);
    income.add_row(vec!["周末加班费".into(), fmt_money(i.weekend_overtime_pay)]);
    income.add_row(vec!["节假日加班费".into(), fmt_money(i.holiday_overtime_pay)]);
    income.add_row(vec!["加班费合计".into(), fmt_money(i.total_overtime_pay)]);
    income.add_row(vec!["餐补合计".into(), fmt_money(i.total_meal_allowance)]);
    income.add_row(vec!["总收入".into(), fmt_money(i.total_income)]);
    income.add_row(vec!["实际加班费".into(), fmt_money(i.actual_overtime_pay)]);
    income.add_row(vec!["实际总收入".into(), fmt_money(i.actual_total_income)]);

    let mut hours = Table::new(vec!["类型", "加班时长", "抵扣后"])
        .with_title("加班时长统计")
        .with_separator(separator);
    for bucket in [PayBucket::Workday, PayBucket::Weekend, PayBucket::Holiday] {
        let (total, actual) = match bucket {
            PayBucket::Workday => (h.workday_hours, h.actual_workday_hours),
            PayBucket::Weekend => (h.weekend_hours, h.actual_weekend_hours),
            PayBucket::Holiday => (h.holiday_hours, h.actual_holiday_hours),
        };
        hours.add_row(vec![
            bucket.label().to_string(),
            fmt_hours(total),
            fmt_hours(actual),
        ]);
    }
    hours.add_row(vec![
        "合计".into(),
        fmt_hours(h.total_hours),
        fmt_hours(h.actual_total_hours),
    ]);

    let mut attendance = Table::new(vec!["项目", "数值"])
        .with_title("考勤统计")
        .with_separator(separator);
    attendance.add_row(vec![
        "出勤天数".into(),
        format!("{}/{}", a.actual_workdays, a.required_workdays),
    ]);
    attendance.add_row(vec![
        "迟到".into(),
        if a.late_count > 0 {
            format!("{}次，共{}分钟", a.late_count, a.late_minutes)
        } else {
            "无迟到记录".to_string()
        },
    ]);
    attendance.add_row(vec![
        "早退".into(),
        if a.early_leave_count > 0 {
            format!("{}次，共{}分钟", a.early_leave_count, a.early_leave_minutes)
        } else {
            "无早退记录".to_string()
        },
    ]);
    attendance.add_row(vec![
        "迟到扣减(未计入)".into(),
        format!(
            "{}分钟 / 剩余{}分钟",
            a.lateness.penalty_minutes, a.lateness.remaining_minutes
        ),
    ]);
    attendance.add_row(vec!["事假".into(), fmt_hours(a.personal_leave_hours)]);
    attendance.add_row(vec!["年假".into(), fmt_hours(a.annual_leave_hours)]);
    attendance.add_row(vec!["迟到抵扣".into(), fmt_hours(a.deduction_leave_hours)]);

    let mut out = String::new();
    out.push_str(&income.render());
    out.push('\n');
    out.push_str(&hours.render());
    out.push('\n');
    out.push_str(&attendance.render());
    out.push('\n');
    out.push_str(&format!("评价: {}\n", summary.rank.message));

    for tip in &summary.tips {
        out.push_str(&textwrap::fill(tip, TIP_WIDTH));
        out.push('\n');
    }

    out
}

/// One row per day. `color` paints amounts, lateness and remote punches.
pub fn render_daily_table(results: &[DailyResult], separator: char, color: bool) -> String {
    let mut table = Table::new(vec![
        "日期", "星期", "类型", "上班", "下班", "加班", "费率", "加班费", "餐补", "合计", "迟到",
        "早退",
    ])
    .with_title("每日明细")
    .with_separator(separator);

    for r in results {
        let mut last = r.last_check_str();
        if r.last_check.is_some_and(|c| c.is_remote) {
            last = format!("{last} 异地");
            if color {
                last = paint_remote(&last);
            }
        }

        let total = fmt_money(r.total_income);
        let late = format!("{}分钟", r.late_minutes);
        let early = format!("{}分钟", r.early_leave_minutes);

        table.add_row(vec![
            r.date.format("%Y-%m-%d").to_string(),
            weekday_label(r.date).to_string(),
            r.day_category.label().to_string(),
            r.first_check_str(),
            last,
            format!("{:.2}", r.overtime_hours),
            format!("{:.0}", r.pay_rate),
            format!("{:.2}", r.overtime_pay),
            format!("{:.0}", r.meal_allowance),
            if color {
                paint_amount(r.total_income, &total)
            } else {
                total
            },
            if color {
                paint_late(r.late_minutes, &late)
            } else {
                late
            },
            if color {
                paint_late(r.early_leave_minutes, &early)
            } else {
                early
            },
        ]);
    }

    table.render()
}

pub fn render_leave_table(book: &LeaveBook, separator: char) -> String {
    let mut table = Table::new(vec!["日期", "类型", "开始", "结束", "时长"])
        .with_title("请假明细")
        .with_separator(separator);

    for category in LeaveCategory::ALL {
        for interval in book.intervals(category).values().flatten() {
            table.add_row(vec![
                interval.date.format("%Y-%m-%d").to_string(),
                category.label().to_string(),
                interval.start.format("%H:%M").to_string(),
                interval.end.format("%H:%M").to_string(),
                fmt_hours(interval.hours()),
            ]);
        }
    }

    table.render()
}
