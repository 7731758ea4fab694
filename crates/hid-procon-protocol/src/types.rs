//! Switch controller model classification and capabilities.

use serde::{Deserialize, Serialize};

/// Switch controller model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProconModel {
    /// Joy-Con (L), single actuator.
    JoyConLeft,
    /// Joy-Con (R), single actuator.
    JoyConRight,
    /// Pro Controller, left and right actuators.
    ProController,
    /// Joy-Con Charging Grip, presents a docked pair over USB.
    ChargingGrip,
}

impl ProconModel {
    /// Construct a model from a USB product ID, returning `None` for unknown PIDs.
    pub fn from_pid(pid: u16) -> Option<Self> {
        match pid {
            crate::ids::PRODUCT_JOYCON_L => Some(ProconModel::JoyConLeft),
            crate::ids::PRODUCT_JOYCON_R => Some(ProconModel::JoyConRight),
            crate::ids::PRODUCT_PRO_CONTROLLER => Some(ProconModel::ProController),
            crate::ids::PRODUCT_CHARGING_GRIP => Some(ProconModel::ChargingGrip),
            _ => None,
        }
    }

    /// Number of haptic actuators the device drives; one command group each.
    pub fn actuator_count(self) -> usize {
        match self {
            ProconModel::JoyConLeft | ProconModel::JoyConRight => 1,
            ProconModel::ProController | ProconModel::ChargingGrip => 2,
        }
    }

    /// Human-readable product name.
    pub fn name(self) -> &'static str {
        match self {
            ProconModel::JoyConLeft => "Nintendo Joy-Con (L)",
            ProconModel::JoyConRight => "Nintendo Joy-Con (R)",
            ProconModel::ProController => "Nintendo Pro Controller",
            ProconModel::ChargingGrip => "Nintendo Joy-Con Charging Grip",
        }
    }
}
