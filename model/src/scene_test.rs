use super::*;
use crate::EventConfig;

fn room() -> Scene {
    Scene::new(SceneConfig { id: "s1".into(), name: "Room".into() })
}

fn door() -> Event {
    Event::new(EventConfig { id: "e1".into(), name: "Door".into(), x: 10.0, y: 20.0, width: 30.0, height: 40.0 })
}

#[test]
fn new_scene_has_documented_defaults() {
    let scene = room();
    assert_eq!(scene.id, "s1");
    assert_eq!(scene.name, "Room");
    assert_eq!(scene.background, "");
    assert!(!scene.has_background());
    assert!(scene.enter.is_none());
    assert!(scene.leave.is_none());
}

#[test]
fn set_background_marks_scene_as_having_one() {
    let mut scene = room();
    scene.set_background("/room.png");
    assert!(scene.has_background());
    assert_eq!(scene.background, "/room.png");
}

#[test]
fn set_enter_returns_previous_event() {
    let mut scene = room();
    assert_eq!(scene.set_enter(Some(door())), None);
    assert_eq!(scene.set_enter(None), Some(door()));
    assert!(scene.enter.is_none());
}

#[test]
fn enter_and_leave_slots_are_independent() {
    let mut scene = room();
    scene.set_leave(Some(door()));
    assert!(scene.enter.is_none());
    assert_eq!(scene.leave.as_ref().map(|e| e.id.as_str()), Some("e1"));
}

#[test]
fn deserialize_fills_defaults() {
    let scene: Scene = serde_json::from_str(r#"{"id":"s1","name":"Room"}"#).unwrap();
    assert_eq!(scene, room());
}
