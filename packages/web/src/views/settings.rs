use dioxus::prelude::*;

use api::{DashboardSettings, Sensor, SensorDraft, SensorType};
use ui::{push_toast, use_toasts, ToastLevel};

/// Settings page: the system-wide settings form plus the sensor console.
#[component]
pub fn Settings() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2rem;",
            SettingsForm {}
            SensorConsole {}
        }
    }
}

#[component]
fn SettingsForm() -> Element {
    let mut settings = use_signal(DashboardSettings::default);
    let mut toasts = use_toasts();

    // Load the stored settings once; the form keeps its defaults if the
    // call fails and the save will surface the error instead.
    let _loader = use_resource(move || async move {
        if let Ok(stored) = api::get_settings().await {
            settings.set(stored);
        }
    });

    let save = move |_| async move {
        match api::save_settings(settings()).await {
            Ok(response) => {
                settings.set(response.settings);
                push_toast(&mut toasts, ToastLevel::Success, &response.message);
            }
            Err(e) => {
                push_toast(&mut toasts, ToastLevel::Error, &format!("Save failed: {e}"));
            }
        }
    };

    rsx! {
        section {
            h2 { class: "section-title", "System Settings" }

            div {
                class: "settings-grid",
                style: "display: grid; grid-template-columns: repeat(2, minmax(220px, 1fr)); gap: 1rem; max-width: 720px;",

                label {
                    class: "form-field",
                    span { "System name" }
                    input {
                        r#type: "text",
                        value: settings().system_name,
                        oninput: move |evt| settings.write().system_name = evt.value(),
                    }
                }
                label {
                    class: "form-field",
                    span { "Data retention (days)" }
                    input {
                        r#type: "text",
                        value: settings().data_retention,
                        oninput: move |evt| settings.write().data_retention = evt.value(),
                    }
                }
                label {
                    class: "form-field",
                    span { "Alert threshold" }
                    input {
                        r#type: "number",
                        step: "0.05",
                        min: "0",
                        max: "1",
                        value: settings().alert_threshold,
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse() {
                                settings.write().alert_threshold = v;
                            }
                        },
                    }
                }
                label {
                    class: "form-field",
                    span { "Alert cooldown (seconds)" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: settings().alert_cooldown,
                        oninput: move |evt| {
                            if let Ok(v) = evt.value().parse() {
                                settings.write().alert_cooldown = v;
                            }
                        },
                    }
                }
                label {
                    class: "form-field",
                    span { "Alert email" }
                    input {
                        r#type: "email",
                        value: settings().alert_email,
                        oninput: move |evt| settings.write().alert_email = evt.value(),
                    }
                }
                label {
                    class: "form-field",
                    span { "Alert SMS number" }
                    input {
                        r#type: "tel",
                        value: settings().alert_sms,
                        oninput: move |evt| settings.write().alert_sms = evt.value(),
                    }
                }
            }

            div {
                style: "display: flex; gap: 1.5rem; margin-top: 1rem; flex-wrap: wrap;",
                ToggleField {
                    label: "Email notifications",
                    value: settings().email_notifications,
                    on_toggle: move |v| settings.write().email_notifications = v,
                }
                ToggleField {
                    label: "SMS notifications",
                    value: settings().sms_notifications,
                    on_toggle: move |v| settings.write().sms_notifications = v,
                }
                ToggleField {
                    label: "Push notifications",
                    value: settings().push_notifications,
                    on_toggle: move |v| settings.write().push_notifications = v,
                }
                ToggleField {
                    label: "Sound alerts",
                    value: settings().enable_sound_alerts,
                    on_toggle: move |v| settings.write().enable_sound_alerts = v,
                }
                ToggleField {
                    label: "Visual alerts",
                    value: settings().enable_visual_alerts,
                    on_toggle: move |v| settings.write().enable_visual_alerts = v,
                }
                ToggleField {
                    label: "Auto export",
                    value: settings().auto_export,
                    on_toggle: move |v| settings.write().auto_export = v,
                }
            }

            button {
                class: "primary-btn",
                style: "margin-top: 1rem;",
                onclick: save,
                "Save Settings"
            }
        }
    }
}

#[component]
fn ToggleField(label: String, value: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 0.375rem; font-size: 0.875rem;",
            input {
                r#type: "checkbox",
                checked: value,
                onchange: move |evt| on_toggle.call(evt.checked()),
            }
            span { "{label}" }
        }
    }
}

#[component]
fn SensorConsole() -> Element {
    let mut sensors = use_signal(Vec::<Sensor>::new);
    let mut toasts = use_toasts();

    // Fields for the create/edit form. `editing` holds the id of the sensor
    // being edited, or None for create mode.
    let mut editing = use_signal(|| None::<String>);
    let mut name = use_signal(String::new);
    let mut sensor_type = use_signal(|| SensorType::Video);
    let mut location = use_signal(String::new);
    let mut sensitivity = use_signal(|| 0.7f64);

    let _loader = use_resource(move || async move {
        if let Ok(list) = api::get_sensors().await {
            sensors.set(list);
        }
    });

    let mut clear_form = move || {
        editing.set(None);
        name.set(String::new());
        sensor_type.set(SensorType::Video);
        location.set(String::new());
        sensitivity.set(0.7);
    };

    let submit = move |_| async move {
        let draft = SensorDraft {
            name: name().trim().to_string(),
            sensor_type: sensor_type(),
            location: location().trim().to_string(),
            sensitivity: sensitivity(),
        };
        if draft.name.is_empty() || draft.location.is_empty() {
            push_toast(&mut toasts, ToastLevel::Warning, "Name and location are required");
            return;
        }

        let result = match editing() {
            Some(id) => api::update_sensor(id, draft).await,
            None => api::create_sensor(draft).await,
        };
        match result {
            Ok(response) => {
                push_toast(&mut toasts, ToastLevel::Success, &response.message);
                if let Ok(list) = api::get_sensors().await {
                    sensors.set(list);
                }
                clear_form();
            }
            Err(e) => push_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
        }
    };

    let mut edit_sensor = move |sensor: Sensor| {
        editing.set(Some(sensor.id));
        name.set(sensor.name);
        sensor_type.set(sensor.sensor_type);
        location.set(sensor.location);
        sensitivity.set(sensor.sensitivity);
    };

    let mut delete = move |id: String| {
        spawn(async move {
            match api::delete_sensor(id).await {
                Ok(response) => {
                    push_toast(&mut toasts, ToastLevel::Success, &response.message);
                    if let Ok(list) = api::get_sensors().await {
                        sensors.set(list);
                    }
                }
                Err(e) => push_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
        });
    };

    rsx! {
        section {
            h2 { class: "section-title", "Sensors" }

            table {
                class: "sensor-table",
                style: "width: 100%; border-collapse: collapse; font-size: 0.875rem;",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Type" }
                        th { "Location" }
                        th { "Status" }
                        th { "Sensitivity" }
                        th { "Last update" }
                        th { "" }
                    }
                }
                tbody {
                    for sensor in sensors() {
                        tr {
                            key: "{sensor.id}",
                            td { "{sensor.id}" }
                            td { "{sensor.name}" }
                            td { "{sensor.sensor_type:?}" }
                            td { "{sensor.location}" }
                            td { "{sensor.status:?}" }
                            td { "{sensor.sensitivity:.2}" }
                            td { "{sensor.last_update}" }
                            td {
                                button {
                                    class: "link-btn",
                                    onclick: {
                                        let sensor = sensor.clone();
                                        move |_| edit_sensor(sensor.clone())
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "link-btn danger",
                                    onclick: {
                                        let id = sensor.id.clone();
                                        move |_| delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "sensor-form",
                style: "display: flex; gap: 0.75rem; align-items: flex-end; margin-top: 1rem; flex-wrap: wrap;",

                label {
                    class: "form-field",
                    span {
                        if editing().is_some() { "Edit sensor" } else { "New sensor" }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                select {
                    value: match sensor_type() {
                        SensorType::Video => "video",
                        SensorType::Audio => "audio",
                        SensorType::Iot => "iot",
                    },
                    onchange: move |evt| {
                        sensor_type.set(match evt.value().as_str() {
                            "audio" => SensorType::Audio,
                            "iot" => SensorType::Iot,
                            _ => SensorType::Video,
                        });
                    },
                    option { value: "video", "Video" }
                    option { value: "audio", "Audio" }
                    option { value: "iot", "IoT" }
                }
                input {
                    r#type: "text",
                    placeholder: "Location",
                    value: location(),
                    oninput: move |evt| location.set(evt.value()),
                }
                input {
                    r#type: "number",
                    step: "0.05",
                    min: "0",
                    max: "1",
                    value: sensitivity(),
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse() {
                            sensitivity.set(v);
                        }
                    },
                }
                button {
                    class: "primary-btn",
                    onclick: submit,
                    if editing().is_some() { "Update" } else { "Add Sensor" }
                }
                if editing().is_some() {
                    button {
                        class: "link-btn",
                        onclick: move |_| clear_form(),
                        "Cancel"
                    }
                }
            }
        }
    }
}
