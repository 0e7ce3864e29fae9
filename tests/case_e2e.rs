use std::sync::Arc;

use mdao_cases::json::from_json;
use mdao_cases::{
    AliasTable, Case, CaseError, CaseKind, Direction, DriverCase, DriverRecord, LookupError,
    PromotedToAbsoluteMap, RecordedCase, SolverCase, SolverRecord, SystemCase, SystemRecord, Value,
};
use serde_json::json;

fn sellar_prom2abs() -> Arc<AliasTable> {
    let payload = json!({
        "input": {
            "x": ["d1.x", "obj_cmp.x"],
            "z": ["d1.z", "d2.z", "obj_cmp.z"],
            "y1": ["d2.y1", "obj_cmp.y1", "con_cmp1.y1"],
            "y2": ["d1.y2", "obj_cmp.y2", "con_cmp2.y2"]
        },
        "output": {
            "x": ["px.x"],
            "z": ["pz.z"],
            "y1": ["d1.y1"],
            "y2": ["d2.y2"],
            "obj": ["obj_cmp.obj"],
            "con1": ["con_cmp1.con1"],
            "con2": ["con_cmp2.con2"]
        }
    });
    Arc::new(from_json("alias table", &payload.to_string()).unwrap())
}

fn base(counter: u64, coord: &str) -> Case {
    Case::new("sellar.sql", counter, coord, 1_700_000_123.5, true, "")
}

#[test]
fn example_lookup_and_miss() {
    let prom2abs: AliasTable =
        from_json("alias table", &json!({"output": {"x": ["comp.x"]}}).to_string()).unwrap();
    let values = from_json("values", &json!({"comp.x": 3.5}).to_string()).unwrap();

    let map = PromotedToAbsoluteMap::new(Some(values), Arc::new(prom2abs), Direction::default());
    assert_eq!(map.get("x").unwrap(), &Value::Float(3.5));
    assert!(map.get("y").unwrap_err().is_key_not_found());
}

#[test]
fn system_case_matches_source_record() {
    let payload = json!({
        "inputs": {"d1.x": 1.0, "d1.z": [5.0, 2.0], "d2.y1": 25.58830237},
        "outputs": {"px.x": 1.0, "pz.z": [5.0, 2.0], "d1.y1": 25.58830237, "d2.y2": 12.05848815},
        "residuals": {"px.x": 0.0, "pz.z": [0.0, 0.0], "d1.y1": 1.3e-10, "d2.y2": -2.1e-11}
    });
    let record: SystemRecord = from_json("system record", &payload.to_string()).unwrap();
    let source = record.clone();
    let prom2abs = sellar_prom2abs();

    let case = SystemCase::new(
        base(3, "rank0:root._solve_nonlinear|2"),
        record,
        Arc::clone(&prom2abs),
    );

    let inputs = source.inputs.as_ref().unwrap();
    for promoted in ["x", "z", "y1"] {
        let absolute = prom2abs.resolve(Direction::Input, promoted).unwrap();
        assert_eq!(case.inputs().get(promoted).unwrap(), inputs.get(absolute).unwrap());
    }

    let outputs = source.outputs.as_ref().unwrap();
    let residuals = source.residuals.as_ref().unwrap();
    for promoted in ["x", "z", "y1", "y2"] {
        let absolute = prom2abs.resolve(Direction::Output, promoted).unwrap();
        assert_eq!(case.outputs().get(promoted).unwrap(), outputs.get(absolute).unwrap());
        assert_eq!(case.residuals().get(promoted).unwrap(), residuals.get(absolute).unwrap());
    }

    // y2 is only an input to d1, which was not recorded in this group
    assert!(matches!(
        case.inputs().get("y2"),
        Err(LookupError::MissingAbsolute { .. })
    ));
    assert_eq!(case.outputs().unresolved(), vec!["con1", "con2", "obj"]);
}

#[test]
fn driver_case_with_partial_groups() {
    let payload = json!({
        "desvars": {"px.x": 1.0, "pz.z": [1.97, 0.0]},
        "objectives": {"obj_cmp.obj": 3.18},
        "constraints": {"con_cmp1.con1": -8.1e-10, "con_cmp2.con2": -20.24}
    });
    let record: DriverRecord = from_json("driver record", &payload.to_string()).unwrap();
    let case = DriverCase::new(base(12, "rank0:SLSQP|5"), record, sellar_prom2abs());

    assert_eq!(case.desvars().get("z").unwrap(), &Value::Array(vec![1.97, 0.0]));
    assert_eq!(case.objectives().get("obj").unwrap().as_float(), Some(3.18));
    assert_eq!(case.constraints().iter().count(), 2);

    // responses and sysincludes were not recorded
    assert!(matches!(case.responses().get("obj"), Err(LookupError::NoData { .. })));
    assert!(!case.sysincludes().has_data());
}

#[test]
fn solver_case_and_tagged_variant() {
    let payload = json!({
        "abs_err": 1.2e-10,
        "rel_err": 4.4e-12,
        "outputs": {"d1.y1": 25.58830237, "d2.y2": 12.05848815}
    });
    let record: SolverRecord = from_json("solver record", &payload.to_string()).unwrap();
    let case: RecordedCase = SolverCase::new(
        base(7, "rank0:root._solve_nonlinear|0|NonlinearBlockGS|6"),
        record,
        sellar_prom2abs(),
    )
    .into();

    assert_eq!(case.kind(), CaseKind::Solver);
    assert_eq!(case.base().coordinate().unwrap().depth(), 2);
    assert_eq!(case.base().recorded_at().unwrap().timestamp(), 1_700_000_123);

    let solver = case.as_solver().unwrap();
    assert!((solver.abs_err() - 1.2e-10).abs() < f64::EPSILON);
    assert_eq!(solver.outputs().get("y2").unwrap(), &Value::Float(12.05848815));
    assert!(solver.residuals().get("y2").is_err());
}

#[test]
fn lookup_errors_convert_to_case_error() {
    fn read(case: &SystemCase) -> Result<f64, CaseError> {
        let v = case.outputs().get("missing")?;
        Ok(v.as_float().unwrap_or_default())
    }

    let case = SystemCase::new(
        base(1, "rank0:root._solve_nonlinear|0"),
        SystemRecord::default(),
        sellar_prom2abs(),
    );
    let err = read(&case).unwrap_err();
    assert!(err.is_lookup());
}

#[test]
fn matrix_variable_does_not_drop_its_group() {
    let payload = r#"{"outputs": {"c.y": 1.0, "c.jac": [[1.0, 2.0], [3.0, 4.0]]}}"#;
    let record: SystemRecord = from_json("system record", payload).unwrap();
    let prom2abs = Arc::new(
        AliasTable::new()
            .with(Direction::Output, "y", ["c.y"])
            .with(Direction::Output, "jac", ["c.jac"]),
    );
    let case = SystemCase::new(base(2, "rank0:root._solve_nonlinear|1"), record, prom2abs);

    assert_eq!(case.outputs().get("y").unwrap(), &Value::Float(1.0));
    let jac = case.outputs().get("jac").unwrap();
    assert_eq!(jac.as_structured(), Some(&json!([[1.0, 2.0], [3.0, 4.0]])));
    assert_eq!(jac.size(), 4);
}

#[test]
fn malformed_payload_is_decode_error() {
    let err = from_json::<DriverRecord>("driver record", r#"{"desvars": 5}"#).unwrap_err();
    let err: CaseError = err.into();
    assert!(err.is_decode());
}
