//! Core data models for the payroll engine.
//!
//! Records read from collaborator stores and the results the engine produces.

mod adjustment;
mod attendance;
mod calculation_result;
mod conversion_rate;
mod employee;
mod holiday;
mod pay_period;
mod tax_bracket;
mod work_schedule;

pub use adjustment::{AdjustmentKind, PayrollAdjustment};
pub use attendance::AttendanceRecord;
pub use calculation_result::{
    CurrencySettlement, OvertimeLine, SalaryBreakdown, SalaryCalculationResult, TaxBracketLine,
};
pub use conversion_rate::ConversionRate;
pub use employee::Employee;
pub use holiday::Holiday;
pub use pay_period::{PayrollPeriod, PeriodStatus};
pub use tax_bracket::TaxBracket;
pub use work_schedule::{
    DEFAULT_DAILY_WORK_HOURS, DEFAULT_MONTHLY_WORK_DAYS, SaturdayPolicy, WorkSchedule,
    week_of_month,
};
