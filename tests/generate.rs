use std::fs;
use std::path::Path;

use wacom_hwdb::{
    generate, generate_for_path, BusType, Error, Result, WacomDevice, WacomDeviceDatabase,
    WacomMatch, HWDB_HEADER,
};

mod common;

const WIRELESS_KIT: &str = "\
# Wacom Wireless Accessory Kit
libwacom:name:*:input:b0003v056Ap0084*
 ID_INPUT=1
 ID_INPUT_TABLET=1
 ID_INPUT_JOYSTICK=0

libwacom:name:* Finger:input:b0003v056Ap0084*:
 ID_INPUT_TOUCHPAD=1

libwacom:name:* Pad:input:b0003v056Ap0084*:
 ID_INPUT_TABLET_PAD=1

";

fn write_tablet(dir: &Path, file: &str, contents: &str) {
    fs::write(dir.join(file), contents).unwrap();
}

fn generate_string(db: &WacomDeviceDatabase) -> Result<String> {
    Ok(String::from_utf8(generate(db, Vec::new())?).unwrap())
}

#[test]
fn bamboo_end_to_end() -> Result<()> {
    common::init();

    let db = WacomDeviceDatabase::from_devices([WacomDevice::new()
        .with_name("Bamboo Test")
        .with_touch(true)
        .with_num_buttons(4)
        .with_matches([WacomMatch::create(BusType::Usb, 0x056a, 0x0084)])]);

    let exp = format!(
        "{HWDB_HEADER}{WIRELESS_KIT}\
# Bamboo Test
libwacom:name:*:input:b0003v056Ap0084*
 ID_INPUT=1
 ID_INPUT_TABLET=1
 ID_INPUT_JOYSTICK=0

libwacom:name:* Finger:input:b0003v056Ap0084*
 ID_INPUT_TOUCHPAD=1

libwacom:name:* Pad:input:b0003v056Ap0084*
 ID_INPUT_TABLET_PAD=1

"
    );

    assert_eq!(generate_string(&db)?, exp);

    Ok(())
}

#[test]
fn serial_only_device_emits_nothing() -> Result<()> {
    common::init();

    let db = WacomDeviceDatabase::from_devices([WacomDevice::new()
        .with_name("Serial Only")
        .with_touch(true)
        .with_num_buttons(8)
        .with_matches([
            WacomMatch::create(BusType::Serial, 0x056a, 0x0090),
            WacomMatch::create(BusType::Serial, 0x056a, 0x0093),
        ])]);

    assert_eq!(generate_string(&db)?, format!("{HWDB_HEADER}{WIRELESS_KIT}"));

    Ok(())
}

#[test]
fn device_without_matches_emits_nothing() -> Result<()> {
    common::init();

    let db = WacomDeviceDatabase::from_devices([WacomDevice::new().with_name("Generic")]);

    assert_eq!(generate_string(&db)?, format!("{HWDB_HEADER}{WIRELESS_KIT}"));

    Ok(())
}

#[test]
fn loads_tablet_files_in_name_order() -> Result<()> {
    common::init();

    let dir = tempfile::tempdir()?;
    write_tablet(
        dir.path(),
        "b-cintiq.tablet",
        "[Device]\nName=Cintiq\nDeviceMatch=usb:056a:0335\nIntegratedIn=Display\n\n[Features]\nTouch=true\n",
    );
    write_tablet(
        dir.path(),
        "a-intuos.tablet",
        "[Device]\nName=Intuos\nDeviceMatch=usb:056a:0357;bluetooth:056a:0360;\n\n[Buttons]\nLeft=A;B\n",
    );
    write_tablet(dir.path(), "c-broken.tablet", "[Device]\nDeviceMatch=usb:056a:0001\n");
    write_tablet(dir.path(), "notes.txt", "[Device]\nName=Ignored\nDeviceMatch=usb:056a:0002\n");

    let db = WacomDeviceDatabase::new_for_path(dir.path())?;
    assert_eq!(db.path(), Some(dir.path()));

    let devices = db.list_devices()?;
    let names: Vec<&str> = devices.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["Intuos", "Cintiq"]);

    let out = generate_string(&db)?;
    let body = out
        .strip_prefix(HWDB_HEADER)
        .and_then(|o| o.strip_prefix(WIRELESS_KIT))
        .unwrap();

    let exp = "\
# Intuos
libwacom:name:*:input:b0003v056Ap0357*
 ID_INPUT=1
 ID_INPUT_TABLET=1
 ID_INPUT_JOYSTICK=0

libwacom:name:* Pad:input:b0003v056Ap0357*
 ID_INPUT_TABLET_PAD=1

# Intuos
libwacom:name:*:input:b0005v056Ap0360*
 ID_INPUT=1
 ID_INPUT_TABLET=1
 ID_INPUT_JOYSTICK=0

libwacom:name:* Pad:input:b0005v056Ap0360*
 ID_INPUT_TABLET_PAD=1

# Cintiq
libwacom:name:*:input:b0003v056Ap0335*
 ID_INPUT=1
 ID_INPUT_TABLET=1
 ID_INPUT_JOYSTICK=0

libwacom:name:* Finger:input:b0003v056Ap0335*
 ID_INPUT_TOUCHSCREEN=1

";
    assert_eq!(body, exp);

    Ok(())
}

#[test]
fn empty_directory_fails_without_output() -> Result<()> {
    common::init();

    let dir = tempfile::tempdir()?;
    let mut out = Vec::new();

    let res = generate_for_path(dir.path(), &mut out);

    assert!(matches!(res, Err(Error::DatabaseLoad(_))));
    assert!(out.is_empty());

    Ok(())
}

#[test]
fn missing_directory_fails_without_output() {
    common::init();

    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();

    let res = generate_for_path(dir.path().join("does-not-exist"), &mut out);

    assert!(matches!(res, Err(Error::DatabaseLoad(_))));
    assert!(out.is_empty());
}
