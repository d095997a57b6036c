use std::io::Write;

use doodle_jump::assets::SpriteSet;
use doodle_jump::GameError;
use tempfile::NamedTempFile;

fn sprite_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn builtin_sprites_without_a_path() {
    let sprites = SpriteSet::load(None).unwrap();
    assert_eq!(sprites, SpriteSet::default());
    assert!(sprites.validate().is_ok());
}

#[test]
fn loads_custom_sprites() {
    let file = sprite_file(
        r#"{"player":"@","platform":"=","background":".","game_over":["GAME OVER"]}"#,
    );
    let sprites = SpriteSet::load(Some(file.path())).unwrap();
    assert_eq!(sprites.player, "@");
    assert_eq!(sprites.platform, '=');
    assert_eq!(sprites.background, '.');
    assert_eq!(sprites.game_over, vec!["GAME OVER".to_string()]);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = SpriteSet::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, GameError::AssetRead { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = sprite_file("{ \"player\": \"@\", ");
    let err = SpriteSet::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, GameError::AssetParse { .. }));
}

#[test]
fn empty_player_sprite_is_rejected() {
    let file = sprite_file(r#"{"player":"  ","platform":"=","background":" ","game_over":["x"]}"#);
    let err = SpriteSet::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, GameError::InvalidAsset(_)));
}

#[test]
fn invisible_platform_is_rejected() {
    let mut sprites = SpriteSet::default();
    sprites.platform = ' ';
    assert!(matches!(sprites.validate(), Err(GameError::InvalidAsset(_))));
}
