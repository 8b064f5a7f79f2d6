use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::SignupDto,
    server::{
        data::user::{group::GroupRepository, NewUser, UserRepository},
        error::{validation::ValidationError, Error},
        model::{actor::PROPERTY_OWNERS_GROUP, db::UserModel},
        util::{form, password},
    },
};

pub static SIGNUP_SUCCESS_MESSAGE: &str =
    "Your account has been created successfully. Wait for admin activation.";
pub static MISSING_OWNER_GROUP_MESSAGE: &str =
    "Property Owners group does not exist. Please contact the administrator.";

/// Result of a signup attempt
#[derive(Debug)]
pub enum SignupOutcome {
    /// Pending account created and added to the owner group
    Created(UserModel),
    /// Form rejected, nothing was stored
    Invalid(ValidationError),
    /// The owner group has not been configured, nothing was stored
    MissingOwnerGroup,
}

/// Registers a new property owner
///
/// The account is created inactive and must be activated by a superuser before it can log in.
/// User creation and group membership are written in a single transaction.
///
/// # Returns
/// - `Ok(SignupOutcome)` - See [`SignupOutcome`] variants
/// - `Err(Error)` - Database or password hashing failure
pub async fn signup_service(
    db: &DatabaseConnection,
    signup: SignupDto,
) -> Result<SignupOutcome, Error> {
    let errors = validate_signup(db, &signup).await?;

    if !errors.is_empty() {
        tracing::debug!("Rejected signup for {:?}: {}", signup.username, errors);

        return Ok(SignupOutcome::Invalid(errors));
    }

    let group_repo = GroupRepository::new(db);
    let Some(group) = group_repo.get_by_name(PROPERTY_OWNERS_GROUP).await? else {
        tracing::error!(
            "Signup for {:?} refused: the {:?} group does not exist",
            signup.username,
            PROPERTY_OWNERS_GROUP
        );

        return Ok(SignupOutcome::MissingOwnerGroup);
    };

    let password_hash = password::hash_password(&signup.password1)?;

    let txn = db.begin().await?;

    let user = UserRepository::new(&txn)
        .create(NewUser {
            username: signup.username.trim().to_string(),
            email: signup.email.trim().to_string(),
            password_hash,
            is_active: false,
            is_staff: false,
            is_superuser: false,
        })
        .await?;

    GroupRepository::new(&txn)
        .add_member(user.id, group.id)
        .await?;

    txn.commit().await?;

    tracing::info!(
        "Created pending account {:?} with user ID {}",
        user.username,
        user.id
    );

    Ok(SignupOutcome::Created(user))
}

async fn validate_signup(
    db: &DatabaseConnection,
    signup: &SignupDto,
) -> Result<ValidationError, Error> {
    let user_repo = UserRepository::new(db);
    let mut errors = ValidationError::new();

    let username = signup.username.trim();
    let email = signup.email.trim();

    if username.is_empty() {
        errors.add("username", form::REQUIRED);
    } else if username.chars().count() > form::MAX_USERNAME_LENGTH {
        errors.add(
            "username",
            form::max_length(form::MAX_USERNAME_LENGTH, username.chars().count()),
        );
    } else if !form::is_valid_username(username) {
        errors.add("username", form::INVALID_USERNAME);
    } else if user_repo.username_exists(username).await? {
        errors.add("username", "A user with that username already exists.");
    }

    if email.is_empty() {
        errors.add("email", form::REQUIRED);
    } else if email.chars().count() > form::MAX_EMAIL_LENGTH {
        errors.add(
            "email",
            form::max_length(form::MAX_EMAIL_LENGTH, email.chars().count()),
        );
    } else if !form::is_valid_email(email) {
        errors.add("email", form::INVALID_EMAIL);
    } else if user_repo.email_exists(email).await? {
        errors.add("email", "A user with that email already exists.");
    }

    if signup.password1.is_empty() {
        errors.add("password1", form::REQUIRED);
    }

    if signup.password2.is_empty() {
        errors.add("password2", form::REQUIRED);
    } else if !signup.password1.is_empty() {
        if signup.password1 != signup.password2 {
            errors.add("password2", "The two password fields didn’t match.");
        } else {
            for message in password::validate_password(&signup.password2, username, email) {
                errors.add("password2", message);
            }
        }
    }

    Ok(errors)
}
