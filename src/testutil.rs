//! In-memory fakes for the store traits, shared by the unit tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use time::Date;
use uuid::Uuid;

use crate::activity::repo::ActivityLedger;
use crate::activity::repo_types::{ActivityEntry, ActivityInput};
use crate::balance::repo::SummaryRepository;
use crate::balance::repo_types::DailyEnergyBalance;
use crate::food::repo::FoodLedger;
use crate::food::repo_types::{FoodEntryInput, FoodLogEntry};
use crate::profile::repo::ProfileStore;
use crate::profile::repo_types::{ProfileInputs, UserProfile};

pub fn profile_with(user_id: Uuid, bmr: Option<f64>, tdee: Option<f64>) -> UserProfile {
    UserProfile {
        user_id,
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        age_years: Some(30),
        sex: None,
        activity_level: None,
        bmr,
        tdee,
    }
}

pub fn food_entry(user_id: Uuid, date: Date, calories: i32, multiplier: f64) -> FoodLogEntry {
    FoodLogEntry {
        id: Uuid::new_v4(),
        user_id,
        name: "test food".into(),
        calories,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
        serving_multiplier: multiplier,
        consumed_at: date.midnight().assume_utc(),
        entry_date: date,
    }
}

pub fn activity_entry(
    user_id: Uuid,
    date: Date,
    external_id: &str,
    calories_burned: i32,
) -> ActivityEntry {
    ActivityEntry {
        id: Uuid::new_v4(),
        user_id,
        external_id: external_id.into(),
        category: "running".into(),
        calories_burned,
        duration_secs: 1800,
        distance_m: None,
        started_at: date.midnight().assume_utc(),
        entry_date: date,
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: Mutex<HashMap<Uuid, UserProfile>>,
}

impl MemoryProfileStore {
    pub fn with_profile(profile: UserProfile) -> Self {
        let store = Self::default();
        store
            .profiles
            .lock()
            .unwrap()
            .insert(profile.user_id, profile);
        store
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get(&self, user_id: Uuid) -> anyhow::Result<Option<UserProfile>> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert_inputs(&self, user_id: Uuid, inputs: &ProfileInputs) -> anyhow::Result<()> {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles.entry(user_id).or_insert_with(|| UserProfile {
            user_id,
            weight_kg: None,
            height_cm: None,
            age_years: None,
            sex: None,
            activity_level: None,
            bmr: None,
            tdee: None,
        });
        profile.weight_kg = inputs.weight_kg;
        profile.height_cm = inputs.height_cm;
        profile.age_years = inputs.age_years;
        profile.sex = inputs.sex;
        profile.activity_level = inputs.activity_level;
        Ok(())
    }

    async fn save_derived(
        &self,
        user_id: Uuid,
        bmr: Option<f64>,
        tdee: Option<f64>,
    ) -> anyhow::Result<()> {
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&user_id) {
            profile.bmr = bmr;
            profile.tdee = tdee;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryFoodLedger {
    entries: Mutex<Vec<FoodLogEntry>>,
}

impl MemoryFoodLedger {
    pub fn push(&self, entry: FoodLogEntry) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

#[async_trait]
impl FoodLedger for MemoryFoodLedger {
    async fn list_for_date(&self, user_id: Uuid, date: Date) -> anyhow::Result<Vec<FoodLogEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && e.entry_date == date)
            .cloned()
            .collect())
    }

    async fn insert(&self, user_id: Uuid, input: &FoodEntryInput) -> anyhow::Result<FoodLogEntry> {
        let entry = FoodLogEntry {
            id: Uuid::new_v4(),
            user_id,
            name: input.name.clone(),
            calories: input.calories,
            protein_g: input.protein_g,
            carbs_g: input.carbs_g,
            fat_g: input.fat_g,
            serving_multiplier: input.serving_multiplier,
            consumed_at: input.consumed_at,
            entry_date: input.entry_date,
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        input: &FoodEntryInput,
    ) -> anyhow::Result<Option<(Date, FoodLogEntry)>> {
        let mut entries = self.entries.lock().unwrap();
        let Some(entry) = entries
            .iter_mut()
            .find(|e| e.id == id && e.user_id == user_id)
        else {
            return Ok(None);
        };
        let old_date = entry.entry_date;
        entry.name = input.name.clone();
        entry.calories = input.calories;
        entry.protein_g = input.protein_g;
        entry.carbs_g = input.carbs_g;
        entry.fat_g = input.fat_g;
        entry.serving_multiplier = input.serving_multiplier;
        entry.consumed_at = input.consumed_at;
        entry.entry_date = input.entry_date;
        Ok(Some((old_date, entry.clone())))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Date>> {
        let mut entries = self.entries.lock().unwrap();
        let Some(idx) = entries
            .iter()
            .position(|e| e.id == id && e.user_id == user_id)
        else {
            return Ok(None);
        };
        Ok(Some(entries.remove(idx).entry_date))
    }
}

#[derive(Default)]
pub struct MemoryActivityLedger {
    entries: Mutex<Vec<ActivityEntry>>,
}

impl MemoryActivityLedger {
    pub fn push(&self, entry: ActivityEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl ActivityLedger for MemoryActivityLedger {
    async fn list_for_date(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> anyhow::Result<Vec<ActivityEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id && e.entry_date == date)
            .cloned()
            .collect())
    }

    async fn upsert_external(
        &self,
        user_id: Uuid,
        input: &ActivityInput,
    ) -> anyhow::Result<ActivityEntry> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries
            .iter_mut()
            .find(|e| e.user_id == user_id && e.external_id == input.external_id)
        {
            entry.category = input.category.clone();
            entry.calories_burned = input.calories_burned;
            entry.duration_secs = input.duration_secs;
            entry.distance_m = input.distance_m;
            entry.started_at = input.started_at;
            entry.entry_date = input.entry_date;
            return Ok(entry.clone());
        }
        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            user_id,
            external_id: input.external_id.clone(),
            category: input.category.clone(),
            calories_burned: input.calories_burned,
            duration_secs: input.duration_secs,
            distance_m: input.distance_m,
            started_at: input.started_at,
            entry_date: input.entry_date,
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<Date>> {
        let mut entries = self.entries.lock().unwrap();
        let Some(idx) = entries
            .iter()
            .position(|e| e.id == id && e.user_id == user_id)
        else {
            return Ok(None);
        };
        Ok(Some(entries.remove(idx).entry_date))
    }
}

#[derive(Default)]
pub struct MemorySummaryRepository {
    rows: Mutex<BTreeMap<(Uuid, Date), DailyEnergyBalance>>,
    puts: AtomicUsize,
}

impl MemorySummaryRepository {
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryRepository for MemorySummaryRepository {
    async fn put(&self, balance: &DailyEnergyBalance) -> anyhow::Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .insert((balance.user_id, balance.entry_date), balance.clone());
        Ok(())
    }

    async fn get(
        &self,
        user_id: Uuid,
        date: Date,
    ) -> anyhow::Result<Option<DailyEnergyBalance>> {
        Ok(self.rows.lock().unwrap().get(&(user_id, date)).cloned())
    }

    async fn get_range(
        &self,
        user_id: Uuid,
        start: Date,
        end: Date,
    ) -> anyhow::Result<Vec<DailyEnergyBalance>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .range((user_id, start)..=(user_id, end))
            .map(|(_, balance)| balance.clone())
            .collect())
    }
}

pub struct FailingFoodLedger;

#[async_trait]
impl FoodLedger for FailingFoodLedger {
    async fn list_for_date(
        &self,
        _user_id: Uuid,
        _date: Date,
    ) -> anyhow::Result<Vec<FoodLogEntry>> {
        anyhow::bail!("food ledger unavailable")
    }

    async fn insert(
        &self,
        _user_id: Uuid,
        _input: &FoodEntryInput,
    ) -> anyhow::Result<FoodLogEntry> {
        anyhow::bail!("food ledger unavailable")
    }

    async fn update(
        &self,
        _user_id: Uuid,
        _id: Uuid,
        _input: &FoodEntryInput,
    ) -> anyhow::Result<Option<(Date, FoodLogEntry)>> {
        anyhow::bail!("food ledger unavailable")
    }

    async fn delete(&self, _user_id: Uuid, _id: Uuid) -> anyhow::Result<Option<Date>> {
        anyhow::bail!("food ledger unavailable")
    }
}

pub struct FailingSummaryRepository;

#[async_trait]
impl SummaryRepository for FailingSummaryRepository {
    async fn put(&self, _balance: &DailyEnergyBalance) -> anyhow::Result<()> {
        anyhow::bail!("summary store unavailable")
    }

    async fn get(
        &self,
        _user_id: Uuid,
        _date: Date,
    ) -> anyhow::Result<Option<DailyEnergyBalance>> {
        anyhow::bail!("summary store unavailable")
    }

    async fn get_range(
        &self,
        _user_id: Uuid,
        _start: Date,
        _end: Date,
    ) -> anyhow::Result<Vec<DailyEnergyBalance>> {
        anyhow::bail!("summary store unavailable")
    }
}
