//! End-to-end scenario tests
//!
//! Each scenario feeds a hand-built construct-event stream through the
//! three-pass use case and checks both the returned findings and the exact
//! report text.

use inflow_core::{
    AnalyzeProgramUseCase, ArgShape, AssignRhs, ComparisonOp, ConstructEvent, Finding,
};
use pretty_assertions::assert_eq;

fn scanf(line: u32, vars: &[&str]) -> ConstructEvent {
    let mut args = vec![ArgShape::Opaque];
    args.extend(vars.iter().map(|v| ArgShape::AddressOf(v.to_string())));
    ConstructEvent::InputCall {
        callee: "scanf".to_string(),
        args,
        line,
    }
}

fn assign(line: u32, dest: &str, rhs: AssignRhs) -> ConstructEvent {
    ConstructEvent::Assignment {
        dest: dest.to_string(),
        rhs,
        line,
    }
}

fn label(line: u32, text: &str) -> ConstructEvent {
    ConstructEvent::Label {
        text: text.to_string(),
        line,
    }
}

fn reference(line: u32, name: &str) -> ConstructEvent {
    ConstructEvent::Reference {
        name: name.to_string(),
        line,
    }
}

fn sentinel_cmp(line: u32, operand: Option<&str>) -> ConstructEvent {
    ConstructEvent::SentinelComparison {
        op: ComparisonOp::Eq,
        operand: operand.map(String::from),
        line,
    }
}

/// Scenario A: x read via scanf; y = x; y referenced at a key-point line
#[test]
fn scenario_a_propagated_taint_reaches_key_point() {
    let events = vec![
        scanf(3, &["x"]),
        assign(5, "y", AssignRhs::SingleRef("x".to_string())),
        label(8, "key_point_1"),
        reference(8, "y"),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert_eq!(
        findings,
        vec![Finding::Influence {
            root: "x".to_string(),
            label: "key_point_1".to_string(),
            line: 8,
        }]
    );

    let report = String::from_utf8(analysis.finish().unwrap()).unwrap();
    assert_eq!(
        report,
        "Found a scanf call with variables: x\n\
         key_point_1 at line 8\n\
         Input variable: x may determine the program's execution path!\n\
         Reason: variable x affects key_point_1 at line: 8 and its value is influenced by input.\n\
         Tool ran, input var list : x \n"
    );
}

/// Scenario B: c read via getc; later c == (-1)
#[test]
fn scenario_b_byte_read_compared_to_sentinel() {
    let events = vec![
        assign(2, "c", AssignRhs::ByteReadCall),
        sentinel_cmp(4, Some("c")),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert_eq!(
        findings,
        vec![Finding::Sentinel {
            variable: "c".to_string(),
        }]
    );

    let report = String::from_utf8(analysis.finish().unwrap()).unwrap();
    assert_eq!(
        report,
        "Found getc() call assigned to variable: c\n\
         Variable c does not directly affect execution, file length may be critical!\n\
         Tool ran, input var list : c \n"
    );
}

/// Scenario C: z = a + b with only a tainted; z referenced at a key point
#[test]
fn scenario_c_binary_assignment_single_tainted_operand() {
    let events = vec![
        scanf(1, &["a"]),
        assign(
            3,
            "z",
            AssignRhs::BinaryRef {
                left: Some("a".to_string()),
                right: Some("b".to_string()),
            },
        ),
        label(7, "key_point_sum"),
        reference(7, "z"),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert_eq!(
        findings,
        vec![Finding::Influence {
            root: "a".to_string(),
            label: "key_point_sum".to_string(),
            line: 7,
        }]
    );
}

/// Scenario D: a never-tainted variable at a key point produces nothing
#[test]
fn scenario_d_untainted_variable_at_key_point() {
    let events = vec![
        scanf(1, &["x"]),
        label(5, "key_point_1"),
        reference(5, "w"),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert!(findings.is_empty());
}

/// Scenario E: a label without the marker never becomes a key point
#[test]
fn scenario_e_unmarked_label_never_registered() {
    let events = vec![
        scanf(1, &["x"]),
        label(5, "loop_start"),
        reference(5, "x"),
        reference(5, "x"),
        reference(5, "x"),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert!(findings.is_empty());
    assert_eq!(analysis.session().key_point_count(), 0);
}

/// A reference lexically before the tainting assignment is still flagged
#[test]
fn reference_before_tainting_assignment_is_flagged() {
    let events = vec![
        label(2, "key_point_early"),
        reference(2, "y"),
        scanf(6, &["x"]),
        assign(7, "y", AssignRhs::SingleRef("x".to_string())),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert_eq!(
        findings,
        vec![Finding::Influence {
            root: "x".to_string(),
            label: "key_point_early".to_string(),
            line: 2,
        }]
    );
}

/// Both binary operands tainted with different roots: left operand wins
#[test]
fn binary_assignment_tie_break_prefers_left_operand() {
    let events = vec![
        scanf(1, &["a", "b"]),
        assign(
            3,
            "z",
            AssignRhs::BinaryRef {
                left: Some("a".to_string()),
                right: Some("b".to_string()),
            },
        ),
        label(5, "key_point_z"),
        reference(5, "z"),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert_eq!(
        findings,
        vec![Finding::Influence {
            root: "a".to_string(),
            label: "key_point_z".to_string(),
            line: 5,
        }]
    );
}

/// A comparison without a bare-variable operand is a recoverable no-op
#[test]
fn sentinel_comparison_without_variable_operand_skipped() {
    let events = vec![
        assign(1, "c", AssignRhs::ByteReadCall),
        sentinel_cmp(3, None),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert!(findings.is_empty());
}

/// Sentinel finding names the compared variable, not its root
#[test]
fn sentinel_finding_reports_alias_not_root() {
    let events = vec![
        scanf(1, &["x"]),
        assign(2, "c", AssignRhs::SingleRef("x".to_string())),
        sentinel_cmp(4, Some("c")),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    assert_eq!(
        findings,
        vec![Finding::Sentinel {
            variable: "c".to_string(),
        }]
    );
}

/// Taint state accumulates across files until the driver resets it
#[test]
fn multi_file_accumulation_and_reset() {
    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());

    analysis.run_file(&[scanf(1, &["x"])]).unwrap();

    let second = vec![label(4, "key_point_other"), reference(4, "x")];
    assert_eq!(analysis.run_file(&second).unwrap().len(), 1);

    analysis.reset();
    assert!(analysis.run_file(&second).unwrap().is_empty());
}

/// Completion marker lists sources once each, in first-registration order
#[test]
fn completion_marker_lists_sources_in_order() {
    let events = vec![
        scanf(1, &["x", "y"]),
        assign(3, "c", AssignRhs::ByteReadCall),
        scanf(5, &["x"]),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    analysis.run_file(&events).unwrap();

    let report = String::from_utf8(analysis.finish().unwrap()).unwrap();
    assert!(report.ends_with("Tool ran, input var list : x y c \n"));
}

/// Findings serialize for downstream tooling
#[test]
fn findings_serialize_to_json() {
    let events = vec![
        scanf(1, &["x"]),
        label(3, "key_point_1"),
        reference(3, "x"),
    ];

    let mut analysis = AnalyzeProgramUseCase::new(Vec::new());
    let findings = analysis.run_file(&events).unwrap();

    let json = serde_json::to_string(&findings).unwrap();
    let back: Vec<Finding> = serde_json::from_str(&json).unwrap();
    assert_eq!(findings, back);
}
