//! Palette store: the single owner of the current palette.
//!
//! Every change to a palette goes through [`PaletteStore`], which keeps the
//! length within bounds, keeps cell order stable, and honors locks. UI
//! layers read `&Palette` snapshots and send [`PaletteIntent`]s back.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::codec::PaletteCodec;
use super::harmony::HarmonyKind;
use super::share::{ShareState, SHARE_PARAM};
use crate::error::PaletteError;
use crate::models::{clamp_size, Cell, Palette, RgbColor, ShadeDirection, DEFAULT_CELLS};

/// A user intent forwarded by an embedding layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteIntent {
    /// Random colors for every unlocked cell
    RegenerateUnlocked,
    /// Flip the lock of one cell
    ToggleLock(usize),
    /// Change the number of cells
    Resize(usize),
    /// Recolor one cell from a color string
    SetColor(usize, String),
    /// Lighten or darken one cell by the given lightness points
    ShiftShade(usize, ShadeDirection, f32),
    /// Fill unlocked cells from a harmony scheme around a base hue
    ApplyHarmony(HarmonyKind, f32),
}

/// Owner of the authoritative palette.
///
/// Generic over the random source so tests can seed it.
#[derive(Debug, Clone)]
pub struct PaletteStore<R = StdRng> {
    palette: Palette,
    rng: R,
}

impl PaletteStore<StdRng> {
    /// Creates a store with [`DEFAULT_CELLS`] random cells, seeded from
    /// the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a store with a deterministic random source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a store initialized from the share parameter of `state`,
    /// falling back to `default_size` random cells.
    pub fn from_share_state(state: &impl ShareState, default_size: usize) -> Self {
        let mut store = Self::new();
        store.load(state, default_size);
        store
    }
}

impl Default for PaletteStore<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PaletteStore<R> {
    /// Creates a store with [`DEFAULT_CELLS`] random cells drawn from `rng`.
    pub fn with_rng(mut rng: R) -> Self {
        let palette = random_palette(&mut rng, DEFAULT_CELLS);
        Self { palette, rng }
    }

    /// The current palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replaces the palette from a share token, or with `size` random
    /// cells when the token is absent or does not decode.
    ///
    /// A decoded palette keeps the token's length; `size` is then ignored.
    /// All cells start unlocked.
    pub fn initialize(&mut self, size: usize, seed: Option<&str>) -> &Palette {
        let seeded = seed.and_then(|token| match PaletteCodec::decode_colors(token) {
            Ok(colors) => Palette::from_colors(colors),
            Err(err) => {
                warn!("Ignoring share token: {err}");
                None
            }
        });

        self.palette = if let Some(palette) = seeded {
            debug!(len = palette.len(), "Palette initialized from share token");
            palette
        } else {
            let size = clamp_size(size);
            debug!(len = size, "Palette initialized with random colors");
            random_palette(&mut self.rng, size)
        };

        &self.palette
    }

    /// Initializes from the share parameter of `state`.
    pub fn load(&mut self, state: &impl ShareState, default_size: usize) -> &Palette {
        let token = state.get(SHARE_PARAM);
        self.initialize(default_size, token.as_deref())
    }

    /// Assigns a new random color to every unlocked cell.
    pub fn regenerate_unlocked(&mut self) -> &Palette {
        let rng = &mut self.rng;
        let mut regenerated = 0usize;
        for cell in self.palette.cells_mut().iter_mut().filter(|c| !c.locked) {
            cell.color = RgbColor::random(rng);
            regenerated += 1;
        }
        debug!(regenerated, "Regenerated unlocked cells");
        &self.palette
    }

    /// Flips the lock flag of the cell at `position`.
    pub fn toggle_lock(&mut self, position: usize) -> Result<&Palette, PaletteError> {
        let cell = self.cell_mut(position)?;
        cell.locked = !cell.locked;
        debug!(position, locked = cell.locked, "Toggled lock");
        Ok(&self.palette)
    }

    /// Changes the number of cells, clamped to the allowed range.
    ///
    /// Shrinking drops cells from the end whether locked or not; growing
    /// appends random unlocked cells. Retained cells keep their position
    /// and lock state.
    pub fn resize(&mut self, new_size: usize) -> &Palette {
        let target = clamp_size(new_size);
        let rng = &mut self.rng;
        let cells = self.palette.cells_mut();
        let before = cells.len();

        if target < before {
            cells.truncate(target);
        } else {
            cells.extend((before..target).map(|_| Cell::unlocked(RgbColor::random(rng))));
        }

        debug!(from = before, to = target, "Resized palette");
        &self.palette
    }

    /// Replaces the color at `position`, keeping its lock flag.
    ///
    /// Locked cells may be recolored; locks only guard against random
    /// regeneration.
    pub fn set_color(&mut self, position: usize, new_color: &str) -> Result<&Palette, PaletteError> {
        let len = self.palette.len();
        if position >= len {
            return Err(PaletteError::OutOfRange { position, len });
        }

        let color = RgbColor::parse(new_color).map_err(|source| PaletteError::InvalidColor {
            input: new_color.to_string(),
            source,
        })?;

        self.apply_color(position, color)
    }

    /// Lightens or darkens the cell at `position` by `amount` lightness
    /// points. Only the magnitude of `amount` counts; a non-finite amount
    /// leaves the color unchanged.
    pub fn shift_shade(
        &mut self,
        position: usize,
        direction: ShadeDirection,
        amount: f32,
    ) -> Result<&Palette, PaletteError> {
        let current = self.cell_mut(position)?.color;
        let shifted = current.shift_lightness(direction, amount);
        debug!(position, ?direction, amount, from = %current, to = %shifted, "Shifted shade");
        self.apply_color(position, shifted)
    }

    /// Fills every unlocked cell from a harmony scheme.
    ///
    /// Cell `i` takes harmony entry `i % 20`; locked cells, length and
    /// order are unchanged.
    pub fn apply_harmony(&mut self, kind: HarmonyKind, base_hue: f32) -> &Palette {
        let harmony = PaletteCodec::generate_harmony_with_rng(kind, base_hue, &mut self.rng);
        for (i, cell) in self.palette.cells_mut().iter_mut().enumerate() {
            if !cell.locked {
                cell.color = RgbColor::from_hsl(harmony[i % harmony.len()]);
            }
        }
        debug!(%kind, base_hue, "Applied harmony");
        &self.palette
    }

    /// Routes an intent to the matching operation.
    pub fn dispatch(&mut self, intent: PaletteIntent) -> Result<&Palette, PaletteError> {
        match intent {
            PaletteIntent::RegenerateUnlocked => Ok(self.regenerate_unlocked()),
            PaletteIntent::ToggleLock(position) => self.toggle_lock(position),
            PaletteIntent::Resize(size) => Ok(self.resize(size)),
            PaletteIntent::SetColor(position, color) => self.set_color(position, &color),
            PaletteIntent::ShiftShade(position, direction, amount) => {
                self.shift_shade(position, direction, amount)
            }
            PaletteIntent::ApplyHarmony(kind, hue) => Ok(self.apply_harmony(kind, hue)),
        }
    }

    /// Share token for the current colors.
    #[must_use]
    pub fn share_token(&self) -> String {
        PaletteCodec::encode_colors(&self.palette.colors())
    }

    /// Writes the current share token into `state`.
    pub fn publish(&self, state: &mut impl ShareState) {
        state.set(SHARE_PARAM, &self.share_token());
    }

    fn cell_mut(&mut self, position: usize) -> Result<&mut Cell, PaletteError> {
        let len = self.palette.len();
        self.palette
            .cells_mut()
            .get_mut(position)
            .ok_or(PaletteError::OutOfRange { position, len })
    }

    fn apply_color(&mut self, position: usize, color: RgbColor) -> Result<&Palette, PaletteError> {
        self.cell_mut(position)?.color = color;
        debug!(position, color = %color, "Set color");
        Ok(&self.palette)
    }
}

fn random_palette<R: Rng>(rng: &mut R, size: usize) -> Palette {
    let size = clamp_size(size);
    let colors: Vec<RgbColor> = (0..size).map(|_| RgbColor::random(rng)).collect();
    // clamp_size guarantees the bounds from_colors checks
    Palette::from_colors(colors).unwrap_or_else(|| unreachable!("clamped palette size"))
}
