use crate::DateKey;
use crate::navigation::{NavigationEvent, Navigator};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Turns a picked calendar date into a [`DateKey`] and asks for navigation.
pub struct DateSelector<N> {
    navigator: N,
    selected: Option<DateKey>,
}

impl<N: Navigator> DateSelector<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            selected: None,
        }
    }

    /// Handles a pick. `None` is a deselection and never navigates.
    ///
    /// Returns the key that was navigated to.
    pub fn select<Tz: TimeZone>(&mut self, picked: Option<DateTime<Tz>>) -> Option<DateKey> {
        let Some(picked) = picked else {
            tracing::debug!("date deselected");
            self.selected = None;
            return None;
        };
        let key = DateKey::from_local(&picked)?;
        tracing::info!(date = %key, "date selected");
        self.selected = Some(key.clone());
        self.navigator
            .navigate(NavigationEvent::OpenEntry(key.clone()));
        Some(key)
    }

    /// Picks `date` at local midnight, the way a calendar widget hands days out.
    pub fn select_day(&mut self, date: Option<NaiveDate>) -> Option<DateKey> {
        let picked = date.and_then(|d| {
            let midnight = d.and_hms_opt(0, 0, 0)?;
            let local = Local.from_local_datetime(&midnight);
            // A DST gap at midnight has no local instant; fall back to noon.
            local
                .earliest()
                .or_else(|| Local.from_local_datetime(&d.and_hms_opt(12, 0, 0)?).earliest())
        });
        if date.is_some() && picked.is_none() {
            tracing::warn!(?date, "picked day has no local instant");
        }
        self.select(picked)
    }

    pub fn selected(&self) -> Option<&DateKey> {
        self.selected.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Hands the navigator back once picking is done.
    pub fn into_navigator(self) -> N {
        self.navigator
    }
}
