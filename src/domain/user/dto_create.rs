#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}
