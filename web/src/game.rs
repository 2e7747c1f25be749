use crate::board::{BoardPresenter, SeedSource, SlotHandle, SlotView};
use crate::controller::AppController;
use crate::settings::Settings;
use crate::strings;
use crate::timers::GlooScheduler;
use crate::utils::*;
use mnemo_core::{Extent, GameEngine, TimerEvent};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Fixed rendered size of every slot.
const SLOT_SIZE: Extent = Extent::new(160.0, 80.0);

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(String),
    Go,
    SlotClicked(SlotHandle),
    Timer(TimerEvent),
}

#[derive(Properties, Clone, PartialEq)]
struct SlotProps {
    slot: SlotView,
    size: Extent,
    callback: Callback<SlotHandle>,
}

#[function_component(SlotButton)]
fn slot_component(props: &SlotProps) -> Html {
    let SlotProps {
        slot,
        size,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("slot {:?} clicked", slot.handle);
        callback.emit(slot.handle)
    });

    html! {
        <button class="slot" style={slot.style(size)} disabled={!slot.enabled} {onclick}>
            { slot.number_visible.then(|| slot.label.to_string()).unwrap_or_default() }
        </button>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    engine: GameEngine<BoardPresenter, GlooScheduler>,
    controller: AppController,
    input: String,
    area_ref: NodeRef,
}

impl GameView {
    /// Feeds the current play area size to the presenter before it lays slots out.
    fn measure_area(&mut self) {
        if let Some(area) = self.area_ref.cast::<web_sys::Element>() {
            let extent = Extent::new(area.client_width().into(), area.client_height().into());
            self.engine.presenter_mut().set_area(extent);
        } else {
            log::warn!("play area is not mounted yet");
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings = Settings::local_or_default();
        settings.local_save();
        log::debug!("settings: {:?}", settings);

        let seeds = ctx
            .props()
            .seed
            .map_or(SeedSource::Browser, SeedSource::Forced);
        let presenter = BoardPresenter::new(SLOT_SIZE, seeds);
        let scheduler = GlooScheduler::new(ctx.link().callback(Msg::Timer));

        Self {
            engine: GameEngine::new(presenter, scheduler, settings.timing),
            controller: AppController::new(settings.validator()),
            input: String::new(),
            area_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Input(value) => {
                self.input = value;
                false
            }
            Go => {
                self.measure_area();
                if let Err(err) = self.controller.submit(&mut self.engine, &self.input) {
                    log::debug!("game not started: {}", err);
                }
                true
            }
            SlotClicked(handle) => {
                let outcome = self.engine.click(&handle);
                log::debug!("click on {:?}: {:?}", handle, outcome);
                outcome.has_update()
            }
            Timer(event) => {
                self.measure_area();
                self.engine.on_timer(event)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let presenter = self.engine.presenter();
        let validator = self.controller.validator();
        let message = presenter.message().map(strings::message_text);

        let oninput = ctx.link().callback(|e: InputEvent| {
            Msg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Go);
        let slot_callback = ctx.link().callback(Msg::SlotClicked);

        html! {
            <div class="mnemo">
                <h1>{strings::APP_TITLE}</h1>
                <label for="slot-count">{strings::INPUT_LABEL}</label>
                <input
                    id="slot-count"
                    type="number"
                    min={validator.min_value().to_string()}
                    max={validator.max_value().to_string()}
                    value={self.input.clone()}
                    {oninput}
                />
                <button {onclick}>{strings::GO_BUTTON}</button>
                <p class="message">{message.unwrap_or_default()}</p>
                <div class="area" ref={self.area_ref.clone()}>
                    {
                        for presenter.slots().iter().map(|&slot| html! {
                            <SlotButton
                                key={slot.handle.key()}
                                {slot}
                                size={presenter.slot_size()}
                                callback={slot_callback.clone()}
                            />
                        })
                    }
                </div>
            </div>
        }
    }
}
