//! Integration tests for the hrdesk library

use std::io::Write;

use tempfile::TempDir;

use hrdesk::{Config, HrAssistant, HrdeskError};

const FAQ_CSV: &str = "\
question,answer,category
What is HRA?,House Rent Allowance is a salary component.,payroll
How do I download my payslip?,Go to Payroll -> Payslips -> Download.,payroll
How do I refer a friend for a job?,Use the referral page on the careers portal.,recruitment
";

const EMPLOYEE_CSV: &str = "\
employee_id,name,department,role,location,paid_leaves,sick_leaves
EMP10234,Asha Rao,Engineering,Developer,Bengaluru,12,5
EMP56789,Rohan Mehta,Finance,Analyst,Mumbai,9,4
";

fn write_tables(dir: &TempDir, faq: &str, employees: &str) -> Config {
    let faq_path = dir.path().join("faqs.csv");
    let employee_path = dir.path().join("employees.csv");
    std::fs::File::create(&faq_path)
        .unwrap()
        .write_all(faq.as_bytes())
        .unwrap();
    std::fs::File::create(&employee_path)
        .unwrap()
        .write_all(employees.as_bytes())
        .unwrap();
    Config { faq_path, employee_path, threshold: 0.45 }
}

fn assistant() -> HrAssistant {
    let dir = TempDir::new().unwrap();
    let config = write_tables(&dir, FAQ_CSV, EMPLOYEE_CSV);
    HrAssistant::open(config).unwrap()
}

// ============================================================
// RULE-BASED FLOWS
// ============================================================

#[test]
fn test_leave_query_with_id_returns_balance() {
    let mut session = assistant().session();

    let answer = session.retrieve("Check leaves for EMP10234");
    assert!(answer.contains("Leave Balance for Asha Rao (EMP10234)"));
    assert!(answer.contains("**Paid Leaves:** 12"));
    assert!(answer.contains("**Sick Leaves:** 5"));
    assert!(answer.contains("**Department:** Engineering"));
}

#[test]
fn test_details_query_with_id_returns_profile() {
    let mut session = assistant().session();

    let answer = session.retrieve("Show employee details EMP56789");
    assert!(answer.contains("### Employee Details"));
    assert!(answer.contains("**Name:** Rohan Mehta"));
    assert!(answer.contains("**Role:** Analyst"));
    assert!(answer.contains("**Location:** Mumbai"));
}

#[test]
fn test_id_lookup_is_case_insensitive() {
    let mut session = assistant().session();

    let upper = session.retrieve("Check leaves for EMP10234");
    let lower = session.retrieve("Check leaves for emp10234");
    assert_eq!(upper, lower);
    assert!(lower.contains("Asha Rao"));
}

#[test]
fn test_unknown_id_is_not_found_not_a_crash() {
    let mut session = assistant().session();

    let answer = session.retrieve("Check leaves for EMP00000");
    assert_eq!(answer, "Employee ID **EMP00000** not found.");

    let answer = session.retrieve("Show details for EMP00000");
    assert_eq!(answer, "Employee ID **EMP00000** not found.");
}

#[test]
fn test_rule_priority_leave_beats_details() {
    let mut session = assistant().session();

    // Both "leave" and "details" present: evaluation order picks leave
    let answer = session.retrieve("leave details for EMP10234");
    assert!(answer.contains("Leave Balance"));
    assert!(!answer.contains("### Employee Details"));
}

#[test]
fn test_payslip_and_bank_rules_are_static_answers() {
    let mut session = assistant().session();

    let answer = session.retrieve("where is my payslip kept");
    assert!(answer.contains("Payroll"));

    let answer = session.retrieve("how do I change my bank account");
    assert!(answer.contains("Bank Details"));
}

// ============================================================
// FOLLOW-UP MEMORY
// ============================================================

#[test]
fn test_leave_memory_round_trip() {
    let mut session = assistant().session();

    let prompt = session.retrieve("How many leaves do I have?");
    assert!(prompt.contains("Please provide your Employee ID"));

    let answer = session.retrieve("EMP10234");
    assert!(answer.contains("Leave Balance for Asha Rao"));
    assert!(answer.contains("**Paid Leaves:** 12"));
}

#[test]
fn test_details_memory_round_trip() {
    let mut session = assistant().session();

    let prompt = session.retrieve("show my profile please");
    assert!(prompt.contains("Please provide the Employee ID"));

    let answer = session.retrieve("emp56789");
    assert!(answer.contains("**Name:** Rohan Mehta"));
}

#[test]
fn test_memory_is_consumed_once() {
    let mut session = assistant().session();

    session.retrieve("How many leaves do I have?");
    let resolved = session.retrieve("EMP10234");
    assert!(resolved.contains("Leave Balance"));

    // No intent left: a bare id falls through to similarity and misses
    let third = session.retrieve("EMP10234");
    assert_eq!(third, hrdesk::ChatSession::fallback_answer());
}

#[test]
fn test_new_intent_overwrites_old_one() {
    let mut session = assistant().session();

    session.retrieve("How many leaves do I have?");
    session.retrieve("actually show me a profile instead");

    // The details intent replaced the leave intent
    let answer = session.retrieve("EMP10234");
    assert!(answer.contains("### Employee Details"));
}

#[test]
fn test_sessions_have_independent_memory() {
    let assistant = assistant();
    let mut a = assistant.session();
    let mut b = assistant.session();

    a.retrieve("How many leaves do I have?");

    // Session b never asked anything; a bare id there falls through
    let b_answer = b.retrieve("EMP10234");
    assert_eq!(b_answer, hrdesk::ChatSession::fallback_answer());

    // Session a's follow-up still resolves
    let a_answer = a.retrieve("EMP10234");
    assert!(a_answer.contains("Leave Balance"));
}

// ============================================================
// FAQ RETRIEVAL AND FALLBACK
// ============================================================

#[test]
fn test_exact_faq_question_returns_stored_answer() {
    let mut session = assistant().session();

    let answer = session.retrieve("What is HRA?");
    assert_eq!(answer, "House Rent Allowance is a salary component.");
}

#[test]
fn test_close_faq_question_matches() {
    let mut session = assistant().session();

    let answer = session.retrieve("how can I refer a friend for an open job");
    assert_eq!(answer, "Use the referral page on the careers portal.");
}

#[test]
fn test_low_scoring_query_returns_fallback_verbatim() {
    let mut session = assistant().session();

    let answer = session.retrieve("what is the weather like on mars today");
    assert_eq!(answer, hrdesk::ChatSession::fallback_answer());
}

#[test]
fn test_empty_query_returns_fallback() {
    let mut session = assistant().session();

    assert_eq!(session.retrieve(""), hrdesk::ChatSession::fallback_answer());
    assert_eq!(session.retrieve("   \t "), hrdesk::ChatSession::fallback_answer());
}

// ============================================================
// INITIALIZATION FAILURES
// ============================================================

#[test]
fn test_missing_faq_table_fails_open() {
    let dir = TempDir::new().unwrap();
    let mut config = write_tables(&dir, FAQ_CSV, EMPLOYEE_CSV);
    config.faq_path = dir.path().join("missing.csv");

    let result = HrAssistant::open(config);
    assert!(matches!(result, Err(HrdeskError::TableRead { .. })));
}

#[test]
fn test_missing_employee_column_fails_open() {
    let dir = TempDir::new().unwrap();
    let config = write_tables(&dir, FAQ_CSV, "employee_id,name\nEMP1,Ira\n");

    let result = HrAssistant::open(config);
    assert!(matches!(result, Err(HrdeskError::TableFormat { .. })));
}

#[test]
fn test_empty_faq_corpus_fails_open() {
    let dir = TempDir::new().unwrap();
    let config = write_tables(&dir, "question,answer,category\n", EMPLOYEE_CSV);

    let result = HrAssistant::open(config);
    assert!(matches!(result, Err(HrdeskError::EmptyCorpus)));
}

#[test]
fn test_out_of_range_threshold_fails_open() {
    let dir = TempDir::new().unwrap();
    let mut config = write_tables(&dir, FAQ_CSV, EMPLOYEE_CSV);
    config.threshold = 1.5;

    let result = HrAssistant::open(config);
    assert!(matches!(result, Err(HrdeskError::Configuration(_))));
}
