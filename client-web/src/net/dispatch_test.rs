use super::*;

use chart::grid::SeatKey;
use chart::plan::Move;

fn key(row: i32, col: i32) -> SeatKey {
    SeatKey::new(row, col)
}

// =============================================================
// plan_for
// =============================================================

#[test]
fn none_action_plans_nothing() {
    assert_eq!(plan_for(&Action::None), DispatchPlan::Nothing);
}

#[test]
fn reject_plans_a_local_alert() {
    let action = Action::Reject { message: "nothing movable".to_owned() };
    assert_eq!(plan_for(&action), DispatchPlan::Alert("nothing movable".to_owned()));
}

#[test]
fn move_plans_a_move_post() {
    let action = Action::Move { student: 7, to: key(2, 3) };
    let DispatchPlan::Submit { endpoint, body, refresh_on_failure } = plan_for(&action) else {
        panic!("expected a submit plan");
    };
    assert_eq!(endpoint, "move");
    assert_eq!(body, serde_json::json!({"student_id": 7, "row": 2, "col": 3}));
    assert!(!refresh_on_failure);
}

#[test]
fn assign_plans_an_assign_post() {
    let action = Action::Assign { student: 9, to: key(0, 0) };
    let DispatchPlan::Submit { endpoint, body, .. } = plan_for(&action) else {
        panic!("expected a submit plan");
    };
    assert_eq!(endpoint, "assign");
    assert_eq!(body, serde_json::json!({"student_id": 9, "row": 0, "col": 0}));
}

#[test]
fn clear_plans_a_clear_post() {
    let action = Action::ClearSeat { at: key(1, 4) };
    let DispatchPlan::Submit { endpoint, body, refresh_on_failure } = plan_for(&action) else {
        panic!("expected a submit plan");
    };
    assert_eq!(endpoint, "clear");
    assert_eq!(body, serde_json::json!({"row": 1, "col": 4}));
    assert!(!refresh_on_failure);
}

#[test]
fn batch_plans_one_atomic_request() {
    let action = Action::MoveBatch {
        moves: vec![Move { student: 1, to: key(1, 0) }, Move { student: 2, to: key(1, 1) }],
    };
    let DispatchPlan::Submit { endpoint, body, refresh_on_failure } = plan_for(&action) else {
        panic!("expected a submit plan");
    };
    assert_eq!(endpoint, "move-batch");
    assert_eq!(
        body,
        serde_json::json!({"moves": [
            {"student_id": 1, "row": 1, "col": 0},
            {"student_id": 2, "row": 1, "col": 1}
        ]})
    );
    // Batch failures may be partial server-side; a refresh reconciles them.
    assert!(refresh_on_failure);
}

#[test]
fn zero_delta_drops_never_reach_the_planner() {
    // The engine resolves no-op drops to Action::None; the dispatcher's
    // only job is to not invent a request for them.
    assert_eq!(plan_for(&Action::None), DispatchPlan::Nothing);
}
