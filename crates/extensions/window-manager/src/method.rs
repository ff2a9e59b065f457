//! Method names and typed argument bags.

use serde::Deserialize;

use winbridge_protocols::error::ChannelError;

/// Every method name the window channel recognizes.
///
/// Names outside this set are answered with not-implemented by the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetBounds,
    SetBounds,
    SetMinimumSize,
    SetMaximumSize,
    IsAlwaysOnTop,
    SetAlwaysOnTop,
    SetFullScreen,
    IsFullScreen,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::GetBounds,
        Method::SetBounds,
        Method::SetMinimumSize,
        Method::SetMaximumSize,
        Method::IsAlwaysOnTop,
        Method::SetAlwaysOnTop,
        Method::SetFullScreen,
        Method::IsFullScreen,
    ];

    /// Look up a method by its wire name. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }

    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetBounds => "getBounds",
            Self::SetBounds => "setBounds",
            Self::SetMinimumSize => "setMinimumSize",
            Self::SetMaximumSize => "setMaximumSize",
            Self::IsAlwaysOnTop => "isAlwaysOnTop",
            Self::SetAlwaysOnTop => "setAlwaysOnTop",
            Self::SetFullScreen => "setFullScreen",
            Self::IsFullScreen => "isFullScreen",
        }
    }

    /// Reserved names that always answer not-implemented.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::SetMinimumSize | Self::SetMaximumSize)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn positive(field: &str, value: f64) -> Result<f64, ChannelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChannelError::InvalidArguments(format!(
            "`{}` must be a positive finite number, got {}",
            field, value
        )))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBoundsParams {
    pub device_pixel_ratio: f64,
}

impl GetBoundsParams {
    pub fn validate(&self) -> Result<(), ChannelError> {
        positive("devicePixelRatio", self.device_pixel_ratio).map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBoundsParams {
    pub device_pixel_ratio: f64,
    pub width: f64,
    pub height: f64,
    /// Accepted for forward compatibility; the origin is never changed.
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl SetBoundsParams {
    pub fn validate(&self) -> Result<(), ChannelError> {
        positive("devicePixelRatio", self.device_pixel_ratio)?;
        positive("width", self.width)?;
        positive("height", self.height)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAlwaysOnTopParams {
    pub is_always_on_top: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFullScreenParams {
    pub is_full_screen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_all_names() {
        for method in Method::ALL {
            assert_eq!(Method::parse(method.name()), Some(method));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Method::parse("minimize"), None);
        assert_eq!(Method::parse(""), None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Method::parse("GetBounds"), None);
        assert_eq!(Method::parse("isfullscreen"), None);
    }

    #[test]
    fn test_reserved_methods() {
        let reserved: Vec<_> = Method::ALL.into_iter().filter(Method::is_reserved).collect();
        assert_eq!(reserved, vec![Method::SetMinimumSize, Method::SetMaximumSize]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::SetFullScreen.to_string(), "setFullScreen");
    }

    #[test]
    fn test_get_bounds_params() {
        let params: GetBoundsParams = serde_json::from_value(json!({"devicePixelRatio": 1.5})).unwrap();
        assert_eq!(params.device_pixel_ratio, 1.5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_get_bounds_params_rejects_zero_ratio() {
        let params: GetBoundsParams = serde_json::from_value(json!({"devicePixelRatio": 0.0})).unwrap();
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("devicePixelRatio"));
    }

    #[test]
    fn test_set_bounds_params_ignores_origin() {
        let params: SetBoundsParams = serde_json::from_value(json!({
            "devicePixelRatio": 2.0,
            "x": 10.0,
            "y": 20.0,
            "width": 400.0,
            "height": 300.0
        }))
        .unwrap();
        assert_eq!(params.x, Some(10.0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_set_bounds_params_rejects_negative_height() {
        let params: SetBoundsParams = serde_json::from_value(json!({
            "devicePixelRatio": 1.0,
            "width": 400.0,
            "height": -1.0
        }))
        .unwrap();
        assert!(params.validate().unwrap_err().to_string().contains("height"));
    }

    #[test]
    fn test_integer_arguments_accepted_as_real() {
        let params: SetBoundsParams = serde_json::from_value(json!({
            "devicePixelRatio": 1,
            "width": 400,
            "height": 300
        }))
        .unwrap();
        assert_eq!(params.width, 400.0);
    }

    #[test]
    fn test_set_always_on_top_params() {
        let params: SetAlwaysOnTopParams =
            serde_json::from_value(json!({"isAlwaysOnTop": true})).unwrap();
        assert!(params.is_always_on_top);
    }

    #[test]
    fn test_set_full_screen_params_requires_bool() {
        let result = serde_json::from_value::<SetFullScreenParams>(json!({"isFullScreen": 1}));
        assert!(result.is_err());
    }
}
