use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::error::InsightError;
use crate::insights::api::{fetch_insight, GeminiTransport};
use crate::insights::controller::{InsightsController, Ticket};

pub enum InsightsMsg {
    Generate,
    Completed(Ticket, Result<String, InsightError>),
}

pub struct InsightsPanel {
    controller: InsightsController,
    transport: GeminiTransport,
    input: NodeRef,
}

impl Component for InsightsPanel {
    type Message = InsightsMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: InsightsController::default(),
            transport: GeminiTransport::from_config(),
            input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            InsightsMsg::Generate => {
                let raw = self
                    .input
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();

                if let Some(ticket) = self.controller.submit(&raw) {
                    let transport = self.transport.clone();
                    ctx.link().send_future(async move {
                        let outcome = fetch_insight(&transport, &ticket.industry).await;
                        InsightsMsg::Completed(ticket, outcome)
                    });
                }
                true
            }
            InsightsMsg::Completed(ticket, outcome) => self.controller.complete(ticket, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.controller.is_loading();
        let onclick = ctx.link().callback(|_: MouseEvent| InsightsMsg::Generate);

        html! {
            <div class="insights-panel">
                <div class="insights-form">
                    <input
                        id="industry-input"
                        type="text"
                        placeholder="e.g. aerospace, medical devices, retail"
                        ref={self.input.clone()}
                    />
                    <button id="generate-insights-button" {onclick} disabled={loading}>
                        {"Generate Insights"}
                    </button>
                </div>
                <div id="loading-spinner" class={classes!("spinner", (!loading).then(|| "hidden"))}></div>
                <div id="insights-output" class="insights-output">
                    {
                        match self.controller.output() {
                            Some((text, true)) => html! { <p class="text-red-400">{text}</p> },
                            Some((text, false)) => html! { <p>{text}</p> },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        }
    }
}
