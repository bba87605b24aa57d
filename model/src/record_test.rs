use super::*;
use crate::{EventConfig, GameConfig, ItemConfig, SceneConfig};
use serde_json::json;

#[test]
fn item_reads_back_image_verbatim() {
    let item = Item::new(ItemConfig { id: "i1".into(), name: "Key".into(), image: "/key.png".into() });
    assert_eq!(item.image, "/key.png");
    assert_eq!(Record::from(item).kind(), "item");
}

#[test]
fn scene_record_serializes_kind_tag() {
    let scene = Scene::new(SceneConfig { id: "s1".into(), name: "Room".into() });
    let value = serde_json::to_value(Record::from(scene)).unwrap();
    assert_eq!(
        value,
        json!({ "kind": "scene", "id": "s1", "name": "Room", "background": "", "enter": null, "leave": null })
    );
}

#[test]
fn deserialize_dispatches_on_kind() {
    let record: Record = serde_json::from_value(json!({
        "kind": "event", "id": "e1", "name": "Door", "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0
    }))
    .unwrap();
    let expected = Event::new(EventConfig { id: "e1".into(), name: "Door".into(), x: 1.0, y: 2.0, width: 3.0, height: 4.0 });
    assert_eq!(record, Record::Event(expected));
}

#[test]
fn unknown_kind_fails_to_decode() {
    let result = serde_json::from_value::<Record>(json!({ "kind": "door", "id": "x" }));
    assert!(result.is_err());
}

#[test]
fn into_scene_only_unwraps_scenes() {
    let scene = Scene::new(SceneConfig { id: "s1".into(), name: "Room".into() });
    assert_eq!(Record::from(scene.clone()).into_scene(), Some(scene));

    let game = Game::new(GameConfig { id: "g".into(), name: "G".into() });
    let record = Record::from(game);
    assert_eq!(record.kind(), Record::GAME);
    assert_eq!(record.into_scene(), None);
}
