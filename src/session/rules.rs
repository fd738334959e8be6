//! Ordered keyword rules producing direct answers or follow-up prompts

use std::sync::Arc;

use crate::directory::EmployeeDirectory;
use crate::session::memory::{DialogueMemory, PendingIntent};
use crate::text;

const LEAVE_ID_PROMPT: &str =
    "Please provide your Employee ID to check leave balance. Example: `EMP10234`";
const DETAILS_ID_PROMPT: &str =
    "Please provide the Employee ID to fetch details. Example: `EMP56789`";
const PAYSLIP_ANSWER: &str = "You can download your payslip from \
    **Payroll → Payslips → Select month → Download** in the portal.";
const BANK_ANSWER: &str = "To update bank details: Go to \
    **Profile → Bank Details → Edit**, enter new account details and submit. \
    Changes will be verified.";

/// First-match-wins keyword rules over the lowercased raw query
///
/// Rule matching is plain substring containment on the lowercased text, not
/// the heavier normalization used by the similarity index. "leave" matching
/// inside "leaves" or "leaving" is intentional loose matching.
pub struct RuleEngine {
    directory: Arc<EmployeeDirectory>,
}

impl RuleEngine {
    pub fn new(directory: Arc<EmployeeDirectory>) -> Self {
        Self { directory }
    }

    /// Evaluate the rules in priority order; the first match produces the
    /// answer. A rule that needs a missing employee id records the pending
    /// intent for the next turn. Returns None when no rule fires, leaving
    /// the pending intent untouched.
    pub fn apply(&self, raw_query: &str, memory: &mut DialogueMemory) -> Option<String> {
        let q = raw_query.to_lowercase();
        let employee_id = text::extract_employee_id(raw_query);

        // Leave queries; "leave" also covers "leaves"
        if q.contains("leave") {
            return Some(match employee_id {
                Some(id) => self.leave_balance(&id),
                None => {
                    memory.set_pending(PendingIntent::AskLeave);
                    LEAVE_ID_PROMPT.to_string()
                }
            });
        }

        // Employee details / profile
        if q.contains("details") || q.contains("profile") {
            return Some(match employee_id {
                Some(id) => self.employee_details(&id),
                None => {
                    memory.set_pending(PendingIntent::AskDetails);
                    DETAILS_ID_PROMPT.to_string()
                }
            });
        }

        // Payslip / payroll: static instructions, nothing to follow up on
        if q.contains("payslip") || q.contains("salary") || q.contains("payroll") {
            memory.clear();
            return Some(PAYSLIP_ANSWER.to_string());
        }

        // Bank detail updates
        if q.contains("bank") && (q.contains("update") || q.contains("change")) {
            memory.clear();
            return Some(BANK_ANSWER.to_string());
        }

        None
    }

    /// Render the leave-balance summary for an employee id, or a not-found
    /// message naming the id
    pub fn leave_balance(&self, employee_id: &str) -> String {
        match self.directory.lookup(employee_id) {
            None => not_found(employee_id),
            Some(emp) => format!(
                "### Leave Balance for {} ({})\n\
                 - **Paid Leaves:** {}\n\
                 - **Sick Leaves:** {}\n\
                 - **Department:** {}",
                emp.name, emp.employee_id, emp.paid_leaves, emp.sick_leaves, emp.department
            ),
        }
    }

    /// Render the full employee profile for an id, or a not-found message
    pub fn employee_details(&self, employee_id: &str) -> String {
        match self.directory.lookup(employee_id) {
            None => not_found(employee_id),
            Some(emp) => format!(
                "### Employee Details\n\
                 - **Name:** {}\n\
                 - **Employee ID:** {}\n\
                 - **Department:** {}\n\
                 - **Role:** {}\n\
                 - **Location:** {}\n\
                 - **Paid Leaves:** {}\n\
                 - **Sick Leaves:** {}",
                emp.name,
                emp.employee_id,
                emp.department,
                emp.role,
                emp.location,
                emp.paid_leaves,
                emp.sick_leaves
            ),
        }
    }
}

fn not_found(employee_id: &str) -> String {
    format!("Employee ID **{}** not found.", employee_id.trim().to_uppercase())
}
