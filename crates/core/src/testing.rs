//! Scripted providers shared by the unit tests.

use async_trait::async_trait;
use loyalty_lookups::{LookupError, PromoProvider, PromoTerms, RateProvider};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// One scripted answer of a fake service.
pub enum Step<T> {
    Answer(T),
    Status(u16),
    /// Sleep this long, then answer with the step that follows it.
    Stall(Duration),
}

/// Rate provider that plays back a script, then keeps answering `fallback`.
pub struct ScriptedRates {
    script: Mutex<VecDeque<Step<f64>>>,
    fallback: Option<f64>,
    calls: AtomicUsize,
}

impl ScriptedRates {
    pub fn new(script: Vec<Step<f64>>, fallback: Option<f64>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(rate: f64) -> Self {
        Self::new(vec![], Some(rate))
    }

    pub fn always_status(status: u16) -> Self {
        Self::new((0..32).map(|_| Step::Status(status)).collect(), None)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_step(&self) -> Option<Step<f64>> {
        self.script.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl RateProvider for ScriptedRates {
    fn id(&self) -> &'static str {
        "FX"
    }

    async fn fetch_rate(&self, _currency: &str) -> Result<f64, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_step() {
            Some(Step::Stall(delay)) => {
                // The delayed answer is taken now so a cancelled attempt consumes it.
                let delayed = self.next_step();
                tokio::time::sleep(delay).await;
                self.answer(delayed)
            }
            step => self.answer(step),
        }
    }
}

impl ScriptedRates {
    fn answer(&self, step: Option<Step<f64>>) -> Result<f64, LookupError> {
        match step {
            Some(Step::Answer(rate)) => Ok(rate),
            Some(Step::Status(status)) => Err(LookupError::Status {
                service: "FX",
                status,
            }),
            Some(Step::Stall(_)) | None => self.fallback.ok_or(LookupError::Status {
                service: "FX",
                status: 500,
            }),
        }
    }
}

/// Promo provider with a single fixed behaviour.
pub struct FixedPromo {
    outcome: Step<PromoTerms>,
    calls: AtomicUsize,
}

impl FixedPromo {
    pub fn new(outcome: Step<PromoTerms>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn terms(bonus: u64, expires_soon: bool) -> Self {
        Self::new(Step::Answer(PromoTerms {
            bonus,
            expires_soon,
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PromoProvider for FixedPromo {
    fn id(&self) -> &'static str {
        "Promo"
    }

    async fn fetch_promo(&self, _code: &str) -> Result<PromoTerms, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Step::Answer(terms) => Ok(*terms),
            Step::Status(status) => Err(LookupError::Status {
                service: "Promo",
                status: *status,
            }),
            Step::Stall(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(PromoTerms {
                    bonus: 999,
                    expires_soon: true,
                })
            }
        }
    }
}
