//! Payroll operations over an injected store.
//!
//! [`PayrollService`] is the single entry point used by the HTTP layer. It
//! loads collections through the repository traits, applies the ledger and
//! export functions, and enforces the administrator passphrase on
//! destructive operations.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::auth::SecurityPolicy;
use crate::calculation::{HoursEntry, PayrollTotals};
use crate::error::{PayrollError, PayrollResult};
use crate::export::{BankFileFormat, ExportFile, ExportFormat, WageSheet, render_bank_file};
use crate::ledger::{
    self, EmployeeHistory, PeriodSummary, compute_period, employee_history, filter_in_range,
    has_collision, summarize_by_period,
};
use crate::models::{Branch, Employee, EmployeeDraft, PayPeriod, PaymentMethod, WageRecord};
use crate::storage::PayrollStore;

/// Records and totals calculated for a period, before saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WagePreview {
    /// One record per employee.
    pub records: Vec<WageRecord>,
    /// Batch totals.
    pub totals: PayrollTotals,
}

/// What saving a period did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum RecordOutcome {
    /// The period was new and the batch was appended.
    Appended {
        /// Records added.
        added: usize,
    },
    /// The period existed and its records were replaced.
    Replaced {
        /// Records removed.
        removed: usize,
        /// Records added.
        added: usize,
    },
}

/// Chart data for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Number of employees on file.
    pub employee_count: usize,
    /// Number of stored wage records.
    pub record_count: usize,
    /// Total net pay per pay period.
    pub periods: Vec<PeriodSummary>,
    /// Net pay per period for each employee.
    pub employees: Vec<EmployeeHistory>,
}

/// The payroll service.
#[derive(Clone)]
pub struct PayrollService {
    store: Arc<dyn PayrollStore>,
    security: SecurityPolicy,
}

impl PayrollService {
    /// Creates a service over `store`.
    pub fn new(store: Arc<dyn PayrollStore>, security: SecurityPolicy) -> Self {
        Self { store, security }
    }

    /// Verifies operator credentials.
    pub fn login(&self, username: &str, password: &str) -> PayrollResult<()> {
        self.security.authenticate(username, password)?;
        info!(username, "Operator logged in");
        Ok(())
    }

    /// Lists employees, optionally restricted to one branch and one payment method.
    pub fn list_employees(
        &self,
        branch: Option<Branch>,
        payment_method: Option<PaymentMethod>,
    ) -> PayrollResult<Vec<Employee>> {
        let mut employees = self.store.load_employees()?;
        employees.retain(|e| {
            branch.is_none_or(|b| e.branch == b)
                && payment_method.is_none_or(|m| e.payment_method == m)
        });
        Ok(employees)
    }

    /// Validates `draft` and stores it as a new employee.
    pub fn create_employee(&self, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let employee = Employee::new(draft)?;
        let stored = employee.clone();
        self.store.update_employees(&mut |employees| {
            employees.push(stored.clone());
            Ok(())
        })?;
        info!(employee_id = %employee.id, name = %employee.name, "Employee created");
        Ok(employee)
    }

    /// Replaces the editable fields of employee `id`.
    ///
    /// Wage records already stored keep the name and wage they were
    /// calculated with.
    pub fn update_employee(&self, id: &str, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let mut updated = None;
        self.store.update_employees(&mut |employees| {
            let employee = employees
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })?;
            employee.apply(draft.clone())?;
            updated = Some(employee.clone());
            Ok(())
        })?;

        let employee = updated.ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })?;
        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Deletes employee `id` after checking the administrator passphrase.
    ///
    /// Their wage records are kept.
    pub fn delete_employee(&self, id: &str, passphrase: Option<&str>) -> PayrollResult<Employee> {
        self.security.confirm_admin(passphrase)?;

        let mut removed = None;
        self.store.update_employees(&mut |employees| {
            let index = employees
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })?;
            removed = Some(employees.remove(index));
            Ok(())
        })?;

        let employee = removed.ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })?;
        info!(employee_id = %employee.id, name = %employee.name, "Employee deleted");
        Ok(employee)
    }

    /// Calculates the records and totals for `period` without saving.
    pub fn preview_period(
        &self,
        period: PayPeriod,
        hours: &HashMap<String, HoursEntry>,
    ) -> PayrollResult<WagePreview> {
        let employees = self.store.load_employees()?;
        let records = compute_period(&employees, hours, period);
        let totals = PayrollTotals::from_records(&records, &employees);
        Ok(WagePreview { records, totals })
    }

    /// Calculates and saves the records for `period`.
    ///
    /// If records already exist for exactly this period, the call fails with
    /// [`PayrollError::PeriodAlreadyRecorded`] unless `passphrase` is given.
    /// With a correct passphrase the old records are replaced.
    pub fn record_period(
        &self,
        period: PayPeriod,
        hours: &HashMap<String, HoursEntry>,
        passphrase: Option<&str>,
    ) -> PayrollResult<RecordOutcome> {
        let employees = self.store.load_employees()?;
        let batch = compute_period(&employees, hours, period);
        self.store_batch(period, batch, passphrase)
    }

    /// Renders the batch calculated for `period` without saving it.
    pub fn export_preview(
        &self,
        period: PayPeriod,
        hours: &HashMap<String, HoursEntry>,
        format: ExportFormat,
    ) -> PayrollResult<ExportFile> {
        let employees = self.store.load_employees()?;
        let batch = compute_period(&employees, hours, period);
        debug!(format = %format, records = batch.len(), "Exporting unsaved batch");
        format.render(&batch, &employees)
    }

    /// Renders the batch calculated for `period`, then saves it as
    /// [`PayrollService::record_period`] does.
    ///
    /// Nothing is saved when rendering fails, and no file is returned when
    /// saving fails.
    pub fn export_and_record(
        &self,
        period: PayPeriod,
        hours: &HashMap<String, HoursEntry>,
        format: ExportFormat,
        passphrase: Option<&str>,
    ) -> PayrollResult<(ExportFile, RecordOutcome)> {
        let employees = self.store.load_employees()?;
        let batch = compute_period(&employees, hours, period);
        let file = format.render(&batch, &employees)?;
        let outcome = self.store_batch(period, batch, passphrase)?;
        Ok((file, outcome))
    }

    fn store_batch(
        &self,
        period: PayPeriod,
        batch: Vec<WageRecord>,
        passphrase: Option<&str>,
    ) -> PayrollResult<RecordOutcome> {
        let added = batch.len();

        let mut outcome = None;
        self.store.update_wage_records(&mut |records| {
            if has_collision(records, &period) {
                if passphrase.is_none() {
                    return Err(PayrollError::PeriodAlreadyRecorded {
                        start: period.start,
                        end: period.end,
                    });
                }
                self.security.confirm_admin(passphrase)?;
                let removed = ledger::replace_period(records, &period, batch.clone());
                outcome = Some(RecordOutcome::Replaced { removed, added });
            } else {
                ledger::append_period(records, batch.clone());
                outcome = Some(RecordOutcome::Appended { added });
            }
            Ok(())
        })?;

        let outcome = outcome.ok_or_else(|| PayrollError::storage("wage records were not updated"))?;
        info!(period = %period.label(), ?outcome, "Pay period recorded");
        Ok(outcome)
    }

    /// Returns the records within `range`, or every record when `range` is `None`.
    pub fn records_in_range(&self, range: Option<PayPeriod>) -> PayrollResult<Vec<WageRecord>> {
        let records = self.store.load_wage_records()?;
        Ok(match range {
            Some(range) => filter_in_range(&records, &range)
                .into_iter()
                .cloned()
                .collect(),
            None => records,
        })
    }

    /// Deletes the records within `range` after checking the passphrase.
    pub fn delete_records_in_range(
        &self,
        range: Option<PayPeriod>,
        passphrase: Option<&str>,
    ) -> PayrollResult<usize> {
        let range = range.ok_or(PayrollError::NoPeriodSelected)?;
        self.security.confirm_admin(passphrase)?;

        let mut removed = 0;
        self.store.update_wage_records(&mut |records| {
            removed = ledger::delete_in_range(records, &range);
            Ok(())
        })?;

        if removed == 0 {
            warn!(range = %range.label(), "No wage records in range to delete");
        } else {
            info!(range = %range.label(), removed, "Wage records deleted");
        }
        Ok(removed)
    }

    /// Renders the bank file for the records within `range`.
    pub fn export_bank_file(
        &self,
        range: Option<PayPeriod>,
        format: BankFileFormat,
    ) -> PayrollResult<ExportFile> {
        let range = range.ok_or(PayrollError::NoPeriodSelected)?;
        let records = self.store.load_wage_records()?;
        let employees = self.store.load_employees()?;

        let selected = filter_in_range(&records, &range);
        debug!(format = %format, records = selected.len(), "Exporting bank file");
        render_bank_file(format, selected, &employees)
    }

    /// Renders the spreadsheet for the records within `range`.
    pub fn export_spreadsheet(&self, range: Option<PayPeriod>) -> PayrollResult<ExportFile> {
        let range = range.ok_or(PayrollError::NoPeriodSelected)?;
        let records = self.store.load_wage_records()?;

        let selected = filter_in_range(&records, &range);
        debug!(records = selected.len(), "Exporting spreadsheet");
        WageSheet::build(selected)?.to_workbook()
    }

    /// Chart data over every stored record.
    pub fn dashboard(&self) -> PayrollResult<Dashboard> {
        let employees = self.store.load_employees()?;
        let records = self.store.load_wage_records()?;
        Ok(Dashboard {
            employee_count: employees.len(),
            record_count: records.len(),
            periods: summarize_by_period(&records),
            employees: employee_history(&records),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::PlaintextSecret;
    use crate::storage::{MemoryStore, WageRecordRepository};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service_with(store: Arc<MemoryStore>) -> PayrollService {
        let security = SecurityPolicy::new(
            "ADMIN",
            Arc::new(PlaintextSecret::new("admin")),
            Arc::new(PlaintextSecret::new("admin")),
        );
        PayrollService::new(store, security)
    }

    fn service() -> PayrollService {
        service_with(Arc::new(MemoryStore::new()))
    }

    fn draft(name: &str, method: PaymentMethod, branch: Branch) -> EmployeeDraft {
        EmployeeDraft {
            name: name.to_string(),
            position: "Winder".to_string(),
            hourly_wage: "10".to_string(),
            fnpf_no: format!("FN-{}", name),
            bank_code: "069".to_string(),
            bank_account_number: "123456".to_string(),
            payment_method: method,
            branch,
        }
    }

    fn week(start: u32, end: u32) -> PayPeriod {
        PayPeriod::from_dates(
            NaiveDate::from_ymd_opt(2026, 1, start).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, end).unwrap(),
        )
        .unwrap()
    }

    fn hours_for(employees: &[&Employee], hours: &str) -> HashMap<String, HoursEntry> {
        employees
            .iter()
            .map(|e| (e.id.clone(), HoursEntry::new(dec(hours), Decimal::ZERO)))
            .collect()
    }

    #[test]
    fn test_login() {
        let service = service();
        assert!(service.login("ADMIN", "admin").is_ok());
        assert!(matches!(
            service.login("ADMIN", "wrong"),
            Err(PayrollError::Unauthorized)
        ));
    }

    #[test]
    fn test_create_and_filter_by_branch() {
        let service = service();
        service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        service
            .create_employee(draft("Ana", PaymentMethod::Cash, Branch::Labasa))
            .unwrap();

        assert_eq!(service.list_employees(None, None).unwrap().len(), 2);
        let suva = service.list_employees(Some(Branch::Suva), None).unwrap();
        assert_eq!(suva.len(), 1);
        assert_eq!(suva[0].name, "Ravi");
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let service = service();
        let mut bad = draft("Ravi", PaymentMethod::Online, Branch::Suva);
        bad.bank_code.clear();
        assert!(matches!(
            service.create_employee(bad),
            Err(PayrollError::InvalidEmployee { .. })
        ));
        assert!(service.list_employees(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_payment_method() {
        let service = service();
        service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        service
            .create_employee(draft("Ana", PaymentMethod::Cash, Branch::Labasa))
            .unwrap();
        service
            .create_employee(draft("Sam", PaymentMethod::Cash, Branch::Suva))
            .unwrap();

        let cash = service.list_employees(None, Some(PaymentMethod::Cash)).unwrap();
        assert_eq!(cash.len(), 2);
        let suva_cash = service
            .list_employees(Some(Branch::Suva), Some(PaymentMethod::Cash))
            .unwrap();
        assert_eq!(suva_cash.len(), 1);
        assert_eq!(suva_cash[0].name, "Sam");
    }

    #[test]
    fn test_update_employee() {
        let service = service();
        let created = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();

        let mut changes = created.to_draft();
        changes.hourly_wage = "12.5".to_string();
        let updated = service.update_employee(&created.id, changes).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.hourly_wage, dec("12.5"));

        assert!(matches!(
            service.update_employee("missing", created.to_draft()),
            Err(PayrollError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_employee_requires_passphrase_and_keeps_records() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        service
            .record_period(week(1, 7), &hours_for(&[&ravi], "40"), None)
            .unwrap();

        assert!(matches!(
            service.delete_employee(&ravi.id, Some("nope")),
            Err(PayrollError::Unauthorized)
        ));
        assert!(service.delete_employee(&ravi.id, None).is_err());

        service.delete_employee(&ravi.id, Some("admin")).unwrap();
        assert!(service.list_employees(None, None).unwrap().is_empty());
        assert_eq!(service.records_in_range(None).unwrap().len(), 1);
    }

    #[test]
    fn test_preview_does_not_persist() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();

        let preview = service
            .preview_period(week(1, 7), &hours_for(&[&ravi], "40"))
            .unwrap();
        assert_eq!(preview.records.len(), 1);
        assert_eq!(preview.totals.total_net_wages, dec("368"));
        assert_eq!(preview.totals.total_suva_wages, dec("368"));
        assert!(store.load_wage_records().unwrap().is_empty());
    }

    #[test]
    fn test_record_period_collision_flow() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();

        let first = service
            .record_period(week(1, 7), &hours_for(&[&ravi], "40"), None)
            .unwrap();
        assert_eq!(first, RecordOutcome::Appended { added: 1 });

        assert!(matches!(
            service.record_period(week(1, 7), &hours_for(&[&ravi], "20"), None),
            Err(PayrollError::PeriodAlreadyRecorded { .. })
        ));
        assert!(matches!(
            service.record_period(week(1, 7), &hours_for(&[&ravi], "20"), Some("bad")),
            Err(PayrollError::Unauthorized)
        ));

        let replaced = service
            .record_period(week(1, 7), &hours_for(&[&ravi], "20"), Some("admin"))
            .unwrap();
        assert_eq!(replaced, RecordOutcome::Replaced { removed: 1, added: 1 });

        let records = service.records_in_range(None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].net_pay, dec("184"));
    }

    #[test]
    fn test_same_start_different_end_appends() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        service
            .record_period(week(1, 7), &hours_for(&[&ravi], "40"), None)
            .unwrap();
        let outcome = service
            .record_period(week(1, 8), &hours_for(&[&ravi], "40"), None)
            .unwrap();
        assert_eq!(outcome, RecordOutcome::Appended { added: 1 });
        assert_eq!(service.records_in_range(None).unwrap().len(), 2);
    }

    #[test]
    fn test_records_in_range_uses_containment() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        service
            .record_period(week(1, 7), &hours_for(&[&ravi], "40"), None)
            .unwrap();
        service
            .record_period(week(8, 14), &hours_for(&[&ravi], "40"), None)
            .unwrap();

        assert_eq!(service.records_in_range(Some(week(1, 7))).unwrap().len(), 1);
        assert_eq!(service.records_in_range(Some(week(1, 14))).unwrap().len(), 2);
        assert_eq!(service.records_in_range(Some(week(2, 14))).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_records_in_range() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        service
            .record_period(week(1, 7), &hours_for(&[&ravi], "40"), None)
            .unwrap();
        service
            .record_period(week(8, 14), &hours_for(&[&ravi], "40"), None)
            .unwrap();

        assert!(matches!(
            service.delete_records_in_range(None, Some("admin")),
            Err(PayrollError::NoPeriodSelected)
        ));
        assert!(matches!(
            service.delete_records_in_range(Some(week(1, 7)), Some("bad")),
            Err(PayrollError::Unauthorized)
        ));
        assert_eq!(
            service
                .delete_records_in_range(Some(week(1, 7)), Some("admin"))
                .unwrap(),
            1
        );
        assert_eq!(service.records_in_range(None).unwrap().len(), 1);
    }

    #[test]
    fn test_exports_require_a_range() {
        let service = service();
        assert!(matches!(
            service.export_bank_file(None, BankFileFormat::Bsp),
            Err(PayrollError::NoPeriodSelected)
        ));
        assert!(matches!(
            service.export_spreadsheet(None),
            Err(PayrollError::NoPeriodSelected)
        ));
    }

    #[test]
    fn test_exports_with_empty_range_are_nothing_to_export() {
        let service = service();
        assert!(matches!(
            service.export_bank_file(Some(week(1, 7)), BankFileFormat::Bred),
            Err(PayrollError::NothingToExport)
        ));
        assert!(matches!(
            service.export_spreadsheet(Some(week(1, 7))),
            Err(PayrollError::NothingToExport)
        ));
    }

    #[test]
    fn test_export_bank_file_after_employee_deleted() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        service
            .record_period(week(1, 7), &hours_for(&[&ravi], "40"), None)
            .unwrap();
        service.delete_employee(&ravi.id, Some("admin")).unwrap();

        let file = service
            .export_bank_file(Some(week(1, 7)), BankFileFormat::Bsp)
            .unwrap();
        assert_eq!(file.text().unwrap(), ",,368.00,Salary,Ravi\n");
    }

    #[test]
    fn test_preview_with_huge_amounts_does_not_panic() {
        let ravi = Employee::with_id(
            "ravi",
            draft("Ravi", PaymentMethod::Online, Branch::Suva),
        )
        .unwrap();
        let mut stored = ravi.clone();
        stored.hourly_wage = dec("99999999999999");
        let service = service_with(Arc::new(MemoryStore::with_data(vec![stored], Vec::new())));

        let hours = HashMap::from([(
            ravi.id.clone(),
            HoursEntry::new(dec("9999999999999999999999"), Decimal::ZERO),
        )]);
        let preview = service.preview_period(week(1, 7), &hours).unwrap();
        assert_eq!(preview.records[0].gross_pay, Decimal::MAX);
        assert_eq!(preview.totals.total_net_wages, preview.records[0].net_pay);
    }

    #[test]
    fn test_export_preview_does_not_persist() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone());
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        let ana = service
            .create_employee(draft("Ana", PaymentMethod::Cash, Branch::Labasa))
            .unwrap();
        let hours = hours_for(&[&ravi, &ana], "40");

        let file = service
            .export_preview(week(1, 7), &hours, ExportFormat::Bank(BankFileFormat::Bsp))
            .unwrap();
        assert_eq!(file.text().unwrap(), "069,123456,368.00,Salary,Ravi\n");

        let workbook = service
            .export_preview(week(1, 7), &hours, ExportFormat::Workbook)
            .unwrap();
        assert!(workbook.bytes.starts_with(b"PK"));
        assert!(store.load_wage_records().unwrap().is_empty());
    }

    #[test]
    fn test_export_preview_of_cash_only_batch_is_nothing_to_export() {
        let service = service();
        let ana = service
            .create_employee(draft("Ana", PaymentMethod::Cash, Branch::Labasa))
            .unwrap();
        assert!(matches!(
            service.export_preview(
                week(1, 7),
                &hours_for(&[&ana], "40"),
                ExportFormat::Bank(BankFileFormat::Bred)
            ),
            Err(PayrollError::NothingToExport)
        ));
    }

    #[test]
    fn test_export_and_record_saves_batch() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        let hours = hours_for(&[&ravi], "40");
        let bsp = ExportFormat::Bank(BankFileFormat::Bsp);

        let (file, outcome) = service
            .export_and_record(week(1, 7), &hours, bsp, None)
            .unwrap();
        assert_eq!(file.file_name, "wage_records_BSP.csv");
        assert_eq!(outcome, RecordOutcome::Appended { added: 1 });
        assert_eq!(service.records_in_range(None).unwrap().len(), 1);

        assert!(matches!(
            service.export_and_record(week(1, 7), &hours, bsp, None),
            Err(PayrollError::PeriodAlreadyRecorded { .. })
        ));

        let (_, outcome) = service
            .export_and_record(week(1, 7), &hours_for(&[&ravi], "20"), bsp, Some("admin"))
            .unwrap();
        assert_eq!(outcome, RecordOutcome::Replaced { removed: 1, added: 1 });
        assert_eq!(service.records_in_range(None).unwrap()[0].net_pay, dec("184"));
    }

    #[test]
    fn test_export_and_record_saves_nothing_when_render_fails() {
        let service = service();
        let ana = service
            .create_employee(draft("Ana", PaymentMethod::Cash, Branch::Labasa))
            .unwrap();
        assert!(
            service
                .export_and_record(
                    week(1, 7),
                    &hours_for(&[&ana], "40"),
                    ExportFormat::Bank(BankFileFormat::Bsp),
                    None
                )
                .is_err()
        );
        assert!(service.records_in_range(None).unwrap().is_empty());
    }

    #[test]
    fn test_dashboard() {
        let service = service();
        let ravi = service
            .create_employee(draft("Ravi", PaymentMethod::Online, Branch::Suva))
            .unwrap();
        let ana = service
            .create_employee(draft("Ana", PaymentMethod::Cash, Branch::Labasa))
            .unwrap();
        service
            .record_period(week(1, 7), &hours_for(&[&ravi, &ana], "40"), None)
            .unwrap();

        let dashboard = service.dashboard().unwrap();
        assert_eq!(dashboard.employee_count, 2);
        assert_eq!(dashboard.record_count, 2);
        assert_eq!(dashboard.periods.len(), 1);
        assert_eq!(dashboard.periods[0].total_net_pay, dec("736"));
        assert_eq!(dashboard.employees.len(), 2);
    }
}
