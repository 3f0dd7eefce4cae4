//! File Upload Component
//!
//! CSV picker and upload button. Reports success to the parent through
//! `on_uploaded`, called once per successful upload.

use leptos::*;
use wasm_bindgen::JsCast;

use finsight::{InsightsBackend, Transaction, UploadForm};

use crate::api;
use crate::components::loading::InlineLoading;
use crate::state::global::{GlobalState, NoticeTopic};

#[component]
pub fn FileUpload(
    #[prop(into)]
    on_uploaded: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(UploadForm::<web_sys::File>::new());

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            form.update(|f| f.select(file));
        }
    };

    let on_upload = move |_| {
        let Some(file) = form.try_update(UploadForm::begin).flatten() else {
            return;
        };

        let backend = state.backend();
        spawn_local(async move {
            let result = match api::read_upload_file(&file).await {
                Ok(upload) => backend.upload_csv(&upload).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Upload error: {}", e).into());
            }

            if let Some(response) = form.try_update(|f| f.finish(result)).flatten() {
                state.show_success(
                    NoticeTopic::Upload,
                    &format!(
                        "{} ({} transactions)",
                        response.message, response.transactions_count
                    ),
                );
                on_uploaded.call(());
            }
        });
    };

    let uploading = move || form.with(|f| f.uploading);

    view! {
        <section class="bg-gray-800 rounded-xl p-6 max-w-xl mx-auto">
            <h2 class="text-xl font-semibold mb-4">"Upload Transactions"</h2>

            <div class="space-y-4">
                <label
                    class="flex items-center justify-center px-4 py-3 bg-gray-700
                           hover:bg-gray-600 rounded-lg cursor-pointer transition-colors
                           border-2 border-dashed border-gray-500 hover:border-blue-500"
                >
                    <input
                        type="file"
                        accept=".csv"
                        class="hidden"
                        on:change=on_change
                        disabled=uploading
                    />
                    <span class="flex items-center gap-2">
                        <span>"📁"</span>
                        "Choose CSV File"
                    </span>
                </label>

                {move || form.with(|f| f.file.as_ref().map(|file| file.name())).map(|name| view! {
                    <p class="text-sm text-gray-300">"Selected: " {name}</p>
                })}

                <button
                    on:click=on_upload
                    disabled=move || !form.with(UploadForm::can_upload)
                    class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors flex items-center justify-center gap-2"
                >
                    {move || uploading().then(|| view! { <InlineLoading /> })}
                    {move || if uploading() { "Uploading..." } else { "Upload & Analyze" }}
                </button>

                {move || form.with(|f| f.error.clone()).map(|err| view! {
                    <div class="text-sm text-red-400 p-2 bg-gray-900 rounded">{err}</div>
                })}

                <p class="text-xs text-gray-500">
                    {format!("Expected CSV format: {}", Transaction::CSV_COLUMNS.join(", "))}
                </p>
            </div>
        </section>
    }
}
