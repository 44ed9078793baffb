//! Integration tests for validated saves, partial updates, and deletes.
//!
//! Exercises the full repository layer against a real database:
//! - Valid saves create exactly one row with the submitted values
//! - Invalid saves write nothing and report every failing field
//! - Foreign-key existence checks (client -> city, pet -> breed)
//! - Partial updates keep unsubmitted fields
//! - Cascade delete of lookups

use assert_matches::assert_matches;
use chrono::{Days, Local, NaiveDate};
use sqlx::PgPool;
use vetsoft_core::client::{self, ClientFields, ClientForm};
use vetsoft_core::medicine::{self, MedicineForm};
use vetsoft_core::pet::{self, PetFields, PetForm};
use vetsoft_core::product::{self, ProductForm};
use vetsoft_core::provider::ProviderForm;
use vetsoft_core::vet::VetForm;
use vetsoft_db::models::breed::CreateBreed;
use vetsoft_db::models::city::CreateCity;
use vetsoft_db::repositories::{
    BreedRepo, CityRepo, ClientRepo, MedicineRepo, PetRepo, ProductRepo, ProviderRepo, VetRepo,
};
use vetsoft_db::SaveError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_city(pool: &PgPool, name: &str) -> i64 {
    CityRepo::create(pool, &CreateCity { name: name.to_string() })
        .await
        .unwrap()
        .id
}

async fn new_breed(pool: &PgPool, name: &str) -> i64 {
    BreedRepo::create(pool, &CreateBreed { name: name.to_string() })
        .await
        .unwrap()
        .id
}

fn client_form(city_id: i64) -> ClientForm {
    ClientForm {
        name: Some("Juan Sebastian Veron".into()),
        phone: Some("54221555232".into()),
        email: Some("brujita75@vetsoft.com".into()),
        city: Some(city_id.to_string()),
    }
}

fn provider_form() -> ProviderForm {
    ProviderForm {
        name: Some("Proveedor ABC".into()),
        phone: Some("123456789".into()),
        email: Some("proveedor@example.com".into()),
        address: Some("Calle 123".into()),
        floor_or_unit: Some("Piso 3c".into()),
    }
}

fn pet_form(breed_id: i64, birthday: &str) -> PetForm {
    PetForm {
        name: Some("Mascota Valida".into()),
        breed: Some(breed_id.to_string()),
        weight: Some("5".into()),
        birthday: Some(birthday.into()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_can_create_and_get_client(pool: PgPool) {
    let city_id = new_city(&pool, "Berisso").await;

    let saved = ClientRepo::save(&pool, &client_form(city_id)).await.unwrap();

    let clients = ClientRepo::list(&pool).await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, saved.id);
    assert_eq!(clients[0].name, "Juan Sebastian Veron");
    assert_eq!(clients[0].phone, 54221555232);
    assert_eq!(clients[0].email, "brujita75@vetsoft.com");
    assert_eq!(clients[0].city_id, city_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cant_create_client_with_invalid_city(pool: PgPool) {
    let result = ClientRepo::save(&pool, &client_form(2384)).await;

    assert_matches!(result, Err(SaveError::Invalid(errors)) => {
        assert_eq!(errors.get("city"), Some(client::CITY_NOT_FOUND));
        assert_eq!(errors.len(), 1);
    });
    assert!(ClientRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_validate_reports_missing_city_row(pool: PgPool) {
    let errors = ClientRepo::validate(&pool, &client_form(2384)).await.unwrap();
    assert!(errors.contains("city"));

    let city_id = new_city(&pool, "Ensenada").await;
    let errors = ClientRepo::validate(&pool, &client_form(city_id)).await.unwrap();
    assert!(errors.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_phone_must_start_with_54(pool: PgPool) {
    let city_id = new_city(&pool, "Berisso").await;
    let form = ClientForm {
        phone: Some("44221555232".into()),
        ..client_form(city_id)
    };

    let result = ClientRepo::save(&pool, &form).await;
    assert_matches!(result, Err(SaveError::Invalid(errors)) if errors.contains("phone"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_client_phone_only(pool: PgPool) {
    let city_id = new_city(&pool, "Berisso").await;
    let client = ClientRepo::save(&pool, &client_form(city_id)).await.unwrap();

    let patch = ClientForm {
        phone: Some("54221555233".into()),
        ..ClientForm::default()
    };
    ClientRepo::update_from_form(&pool, &client, &patch).await.unwrap();

    let updated = ClientRepo::find_by_id(&pool, client.id).await.unwrap().unwrap();
    assert_eq!(updated.phone, 54221555233);
    assert_eq!(updated.name, client.name);
    assert_eq!(updated.email, client.email);
    assert_eq!(updated.city_id, client.city_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_update_leaves_row_untouched(pool: PgPool) {
    let city_id = new_city(&pool, "Berisso").await;
    let client = ClientRepo::save(&pool, &client_form(city_id)).await.unwrap();

    let patch = ClientForm {
        email: Some("brujita75@hotmail.com".into()),
        city: Some("2384".into()),
        ..ClientForm::default()
    };
    let result = ClientRepo::update_from_form(&pool, &client, &patch).await;
    assert_matches!(result, Err(SaveError::Invalid(errors)) => {
        assert_eq!(errors.get("email"), Some(client::EMAIL_WRONG_DOMAIN));
        assert_eq!(errors.get("city"), Some(client::CITY_NOT_FOUND));
    });

    let stored = ClientRepo::find_by_id(&pool, client.id).await.unwrap().unwrap();
    assert_eq!(stored.email, "brujita75@vetsoft.com");
    assert_eq!(stored.city_id, city_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_city_cascades_to_clients(pool: PgPool) {
    let city_id = new_city(&pool, "Berisso").await;
    let client = ClientRepo::save(&pool, &client_form(city_id)).await.unwrap();

    assert!(CityRepo::delete(&pool, city_id).await.unwrap());
    assert!(ClientRepo::find_by_id(&pool, client.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vanished_city_is_reported_on_city_field(pool: PgPool) {
    // Bypasses the existence check, as when the city is deleted mid-save.
    let fields = ClientFields {
        name: "Juan".into(),
        phone: 54221555232,
        email: "juan@vetsoft.com".into(),
        city_id: 999_999,
    };
    let err = ClientRepo::create(&pool, &fields).await.unwrap_err();

    assert_matches!(SaveError::from(err), SaveError::Invalid(errors) => {
        assert_eq!(errors.get("city"), Some(client::CITY_NOT_FOUND));
        assert_eq!(errors.len(), 1);
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_over_long_client_name_never_reaches_the_column(pool: PgPool) {
    let city_id = new_city(&pool, "La Plata").await;
    let form = ClientForm {
        name: Some("a".repeat(client::NAME_MAX_CHARS + 1)),
        ..client_form(city_id)
    };

    let err = ClientRepo::save(&pool, &form).await.unwrap_err();
    assert_matches!(err, SaveError::Invalid(errors) => {
        assert_eq!(errors.get("name"), Some(client::NAME_TOO_LONG));
    });
    assert!(ClientRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// City / Breed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_can_create_cities_in_order(pool: PgPool) {
    let names = ["Berisso", "Ensenada", "La Plata"];
    for name in names {
        new_city(&pool, name).await;
    }

    let cities = CityRepo::list(&pool).await.unwrap();
    let listed: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(listed, names);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_city_name_violates_unique_constraint(pool: PgPool) {
    new_city(&pool, "Berisso").await;
    let err = CityRepo::create(&pool, &CreateCity { name: "Berisso".into() })
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.constraint(), Some("uq_cities_name"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_violation_stays_a_database_error(pool: PgPool) {
    new_city(&pool, "Berisso").await;
    let err = CityRepo::create(&pool, &CreateCity { name: "Berisso".into() })
        .await
        .unwrap_err();

    assert_matches!(SaveError::from(err), SaveError::Database(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_can_create_breeds(pool: PgPool) {
    new_breed(&pool, "Perro - Ovejero Aleman").await;
    new_breed(&pool, "Gato - Persa").await;

    let breeds = BreedRepo::list(&pool).await.unwrap();
    assert_eq!(breeds.len(), 2);
    assert_eq!(breeds[0].name, "Perro - Ovejero Aleman");
    assert_eq!(breeds[1].name, "Gato - Persa");
}

// ---------------------------------------------------------------------------
// Vet / Provider
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_can_create_vet(pool: PgPool) {
    let form = VetForm {
        name: Some("Veterinaria 1".into()),
        phone: Some("54100".into()),
        email: Some("Veterinaria@vetsoft.com".into()),
    };
    let vet = VetRepo::save(&pool, &form).await.unwrap();
    assert_eq!(vet.phone, "54100");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cant_create_vet_with_invalid_email(pool: PgPool) {
    let form = VetForm {
        name: Some("vet1".into()),
        phone: Some("54014".into()),
        email: Some("xxxxx".into()),
    };
    assert_matches!(VetRepo::save(&pool, &form).await, Err(SaveError::Invalid(_)));
    assert!(VetRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_can_update_provider_floor(pool: PgPool) {
    let provider = ProviderRepo::save(&pool, &provider_form()).await.unwrap();
    assert_eq!(provider.floor_or_unit, "Piso 3c");

    let patch = ProviderForm {
        floor_or_unit: Some("casa".into()),
        ..ProviderForm::default()
    };
    ProviderRepo::update_from_form(&pool, &provider, &patch).await.unwrap();

    let updated = ProviderRepo::find_by_id(&pool, provider.id).await.unwrap().unwrap();
    assert_eq!(updated.floor_or_unit, "casa");
    assert_eq!(updated.address, "Calle 123");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_provider_patch_keeps_floor(pool: PgPool) {
    let provider = ProviderRepo::save(&pool, &provider_form()).await.unwrap();

    let patch = ProviderForm {
        floor_or_unit: Some(String::new()),
        ..ProviderForm::default()
    };
    ProviderRepo::update_from_form(&pool, &provider, &patch).await.unwrap();

    let updated = ProviderRepo::find_by_id(&pool, provider.id).await.unwrap().unwrap();
    assert_eq!(updated.floor_or_unit, "Piso 3c");
}

// ---------------------------------------------------------------------------
// Product / Medicine
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_price_rules(pool: PgPool) {
    let form = ProductForm {
        name: Some("Producto Invalido".into()),
        kind: Some("Tipo".into()),
        price: Some("-10".into()),
    };
    assert_matches!(ProductRepo::save(&pool, &form).await, Err(SaveError::Invalid(errors)) => {
        assert_eq!(errors.get("price"), Some(product::PRICE_NOT_POSITIVE));
        assert_eq!(errors.len(), 1);
    });

    let form = ProductForm {
        price: Some("10".into()),
        ..form
    };
    let product = ProductRepo::save(&pool, &form).await.unwrap();
    assert_eq!(product.price, 10.0);
    assert_eq!(product.kind, "Tipo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_medicine_dose_rules(pool: PgPool) {
    let form = MedicineForm {
        name: Some("Medicina_Invalida".into()),
        description: Some("Descripción".into()),
        dose: Some("0.5".into()),
    };
    assert_matches!(MedicineRepo::save(&pool, &form).await, Err(SaveError::Invalid(errors)) => {
        assert_eq!(errors.get("dose"), Some(medicine::DOSE_OUT_OF_RANGE));
    });

    let form = MedicineForm {
        dose: Some("5".into()),
        ..form
    };
    let saved = MedicineRepo::save(&pool, &form).await.unwrap();
    assert_eq!(saved.dose, 5.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_medicine_update_revalidates_merged_state(pool: PgPool) {
    let form = MedicineForm {
        name: Some("ibuprofeno".into()),
        description: Some("dscrp".into()),
        dose: Some("1".into()),
    };
    let saved = MedicineRepo::save(&pool, &form).await.unwrap();

    let patch = MedicineForm {
        dose: Some("11".into()),
        ..MedicineForm::default()
    };
    let result = MedicineRepo::update_from_form(&pool, &saved, &patch).await;
    assert_matches!(result, Err(SaveError::Invalid(errors)) if errors.contains("dose"));

    let stored = MedicineRepo::find_by_id(&pool, saved.id).await.unwrap().unwrap();
    assert_eq!(stored.dose, 1.0);
}

// ---------------------------------------------------------------------------
// Pet
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_can_create_pet(pool: PgPool) {
    let breed_id = new_breed(&pool, "B").await;
    let pet = PetRepo::save(&pool, &pet_form(breed_id, "2024-05-20"), today())
        .await
        .unwrap();
    assert_eq!(pet.breed_id, breed_id);
    assert_eq!(pet.birthday, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pet_birthday_tomorrow_is_rejected(pool: PgPool) {
    let breed_id = new_breed(&pool, "B").await;
    let tomorrow = today()
        .checked_add_days(Days::new(1))
        .unwrap()
        .format(pet::BIRTHDAY_FORMAT)
        .to_string();

    let result = PetRepo::save(&pool, &pet_form(breed_id, &tomorrow), today()).await;
    assert_matches!(result, Err(SaveError::Invalid(errors)) => {
        assert_eq!(errors.get("birthday"), Some(pet::BIRTHDAY_NOT_PAST));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cant_create_empty_pet(pool: PgPool) {
    let form = PetForm {
        name: Some(String::new()),
        breed: Some("0".into()),
        weight: Some("0".into()),
        birthday: Some(String::new()),
    };
    let errors = PetRepo::validate(&pool, &form, today()).await.unwrap();
    assert_eq!(errors.get("name"), Some(pet::NAME_REQUIRED));
    assert_eq!(errors.get("breed"), Some(pet::BREED_NOT_FOUND));
    assert_eq!(errors.get("weight"), Some(pet::WEIGHT_NOT_POSITIVE));
    assert_eq!(errors.get("birthday"), Some(pet::BIRTHDAY_REQUIRED));
    assert!(PetRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_pet_with_its_own_values(pool: PgPool) {
    let breed_id = new_breed(&pool, "B").await;
    let pet = PetRepo::save(&pool, &pet_form(breed_id, "2024-05-20"), today())
        .await
        .unwrap();

    let updated = PetRepo::update_from_form(&pool, &pet, &pet.to_form(), today())
        .await
        .unwrap();
    assert_eq!(updated.name, pet.name);
    assert_eq!(updated.weight, pet.weight);
    assert_eq!(updated.birthday, pet.birthday);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_pet(pool: PgPool) {
    let breed_id = new_breed(&pool, "Ovejero Aleman").await;
    let pet = PetRepo::save(&pool, &pet_form(breed_id, "2024-05-20"), today())
        .await
        .unwrap();

    assert!(PetRepo::delete(&pool, pet.id).await.unwrap());
    assert!(!PetRepo::delete(&pool, pet.id).await.unwrap());
    assert!(PetRepo::find_by_id(&pool, pet.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vanished_breed_is_reported_on_breed_field(pool: PgPool) {
    let breed_id = new_breed(&pool, "Beagle").await;
    let saved = PetRepo::save(&pool, &pet_form(breed_id, "2024-05-20"), today())
        .await
        .unwrap();
    let fields = PetFields {
        name: saved.name.clone(),
        breed_id: 999_999,
        weight: saved.weight,
        birthday: saved.birthday,
    };

    let err = PetRepo::update(&pool, saved.id, &fields).await.unwrap_err();
    assert_matches!(SaveError::from(err), SaveError::Invalid(errors) => {
        assert_eq!(errors.get("breed"), Some(pet::BREED_NOT_FOUND));
    });
}
