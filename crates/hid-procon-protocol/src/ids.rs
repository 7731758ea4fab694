//! Nintendo USB vendor and product ID constants.
//!
//! ## Verification status
//!
//! | Field | Status | Source |
//! |-------|--------|--------|
//! | VID 0x057E | ✅ Confirmed | Linux kernel `hid-ids.h` (`USB_VENDOR_ID_NINTENDO`) |
//! | Joy-Con (L) PID 0x2006 | ✅ Confirmed | Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_JOYCONL`), dekuNukem |
//! | Joy-Con (R) PID 0x2007 | ✅ Confirmed | Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_JOYCONR`), dekuNukem |
//! | Pro Controller PID 0x2009 | ✅ Confirmed | Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_PROCON`), dekuNukem |
//! | Charging Grip PID 0x200E | ✅ Confirmed | Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_CHRGGRIP`) |
//!
//! ## HID protocol notes
//!
//! Joy-Cons attach over Bluetooth with the same PIDs; the charging grip
//! bridges a docked Joy-Con pair onto USB. All listed devices accept the
//! 4-byte rumble command groups encoded by [`crate::rumble`].

/// Nintendo USB Vendor ID.
///
/// ✅ Confirmed: Linux kernel `hid-ids.h` (`USB_VENDOR_ID_NINTENDO = 0x057e`).
pub const VENDOR_ID: u16 = 0x057E;

/// Joy-Con (L) product ID.
///
/// ✅ Confirmed: Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_JOYCONL = 0x2006`),
/// dekuNukem/Nintendo_Switch_Reverse_Engineering.
pub const PRODUCT_JOYCON_L: u16 = 0x2006;

/// Joy-Con (R) product ID.
///
/// ✅ Confirmed: Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_JOYCONR = 0x2007`),
/// dekuNukem/Nintendo_Switch_Reverse_Engineering.
pub const PRODUCT_JOYCON_R: u16 = 0x2007;

/// Pro Controller product ID.
///
/// ✅ Confirmed: Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_PROCON = 0x2009`),
/// dekuNukem/Nintendo_Switch_Reverse_Engineering.
pub const PRODUCT_PRO_CONTROLLER: u16 = 0x2009;

/// Joy-Con Charging Grip product ID.
///
/// ✅ Confirmed: Linux kernel `hid-ids.h` (`USB_DEVICE_ID_NINTENDO_CHRGGRIP = 0x200e`).
pub const PRODUCT_CHARGING_GRIP: u16 = 0x200E;

/// Returns `true` if the VID/PID pair identifies a known Switch controller.
pub fn is_switch_controller(vid: u16, pid: u16) -> bool {
    vid == VENDOR_ID
        && matches!(
            pid,
            PRODUCT_JOYCON_L | PRODUCT_JOYCON_R | PRODUCT_PRO_CONTROLLER | PRODUCT_CHARGING_GRIP
        )
}

/// Returns the product name for a known PID, or `None` for unknown PIDs.
pub fn product_name(pid: u16) -> Option<&'static str> {
    match pid {
        PRODUCT_JOYCON_L => Some("Nintendo Joy-Con (L)"),
        PRODUCT_JOYCON_R => Some("Nintendo Joy-Con (R)"),
        PRODUCT_PRO_CONTROLLER => Some("Nintendo Pro Controller"),
        PRODUCT_CHARGING_GRIP => Some("Nintendo Joy-Con Charging Grip"),
        _ => None,
    }
}
