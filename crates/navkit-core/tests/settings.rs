use navkit_core::{NavError, NavSettings, OffMeshLink, RawOffMeshLink, Vec3};

#[test]
fn default_settings_validate() {
    NavSettings::default().validate().expect("defaults are valid");
}

#[test]
fn negative_radius_is_rejected() {
    let settings = NavSettings {
        agent_radius: -0.1,
        ..NavSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(NavError::InvalidSetting {
            name: "agent_radius",
            value: -0.1,
        })
    );
}

#[test]
fn link_type_two_is_bidirectional() {
    let raw = RawOffMeshLink {
        start: Vec3::ZERO,
        end: Vec3::X,
        link_type: 2,
    };
    assert!(OffMeshLink::from_raw(&raw).bidirectional);

    let one_way = OffMeshLink::from(RawOffMeshLink { link_type: 1, ..raw });
    assert!(!one_way.bidirectional);
    assert_eq!(one_way.end, Vec3::X);
}
